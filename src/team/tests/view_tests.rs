//! Tests for directory filtering, sorting and pagination.

use std::num::NonZeroUsize;

use rstest::{fixture, rstest};

use super::{member, roster};
use crate::team::domain::{
    DirectoryView, EmploymentStatus, SortDirection, SortKey, TeamCategory, TeamMember,
};

const FIVE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

#[fixture]
fn view() -> DirectoryView {
    DirectoryView::new(FIVE)
}

fn names(rows: &[TeamMember]) -> Vec<&str> {
    rows.iter().map(TeamMember::name).collect()
}

fn filtered_names<'a>(view: &DirectoryView, roster: &'a [TeamMember]) -> Vec<&'a str> {
    view.filter(roster).into_iter().map(TeamMember::name).collect()
}

#[rstest]
#[case("designer")]
#[case("DESIGNER")]
#[case("Designer")]
fn search_matches_role_case_insensitively(mut view: DirectoryView, #[case] query: &str) {
    let roster = roster();
    view.set_query(query);
    assert_eq!(
        filtered_names(&view, &roster),
        ["Ada Lovelace", "Katherine Johnson"]
    );
}

#[rstest]
#[case("grace", "Grace Hopper")]
#[case("turing@example", "Alan Turing")]
#[case("emp-003", "Joan Clarke")]
fn search_covers_name_email_and_employee_id(
    mut view: DirectoryView,
    #[case] query: &str,
    #[case] expected: &str,
) {
    let roster = roster();
    view.set_query(query);
    assert_eq!(filtered_names(&view, &roster), [expected]);
}

#[rstest]
fn filters_are_anded_across_stages(mut view: DirectoryView) {
    let roster = roster();
    view.set_category(TeamCategory::Named("Product".to_owned()));
    view.toggle_status(EmploymentStatus::FullTime);
    assert_eq!(
        filtered_names(&view, &roster),
        ["Ada Lovelace", "Katherine Johnson"]
    );

    view.set_query("katherine");
    assert_eq!(filtered_names(&view, &roster), ["Katherine Johnson"]);
}

#[rstest]
fn checkbox_sets_are_ored_within_themselves(mut view: DirectoryView) {
    let roster = roster();
    view.toggle_role("Marketing");
    view.toggle_role("Web Designer");
    assert_eq!(view.filter(&roster).len(), 4);

    view.toggle_status(EmploymentStatus::PartTime);
    view.toggle_status(EmploymentStatus::Internship);
    assert_eq!(
        filtered_names(&view, &roster),
        ["Joan Clarke", "Claude Shannon"]
    );

    view.toggle_role("Marketing");
    assert!(view.filter(&roster).is_empty());
}

#[rstest]
fn members_without_a_team_only_appear_under_all(mut view: DirectoryView) {
    let roster = roster();
    view.set_category(TeamCategory::Named("Platform".to_owned()));
    assert!(!filtered_names(&view, &roster).contains(&"Claude Shannon"));
    view.set_category(TeamCategory::All);
    assert_eq!(view.filter(&roster).len(), roster.len());
}

#[rstest]
fn filtering_is_idempotent(mut view: DirectoryView) {
    let roster = roster();
    view.set_query("e");
    view.toggle_status(EmploymentStatus::FullTime);
    view.toggle_role("Engineer");

    let once: Vec<TeamMember> = view.filter(&roster).into_iter().cloned().collect();
    let twice: Vec<TeamMember> = view.filter(&once).into_iter().cloned().collect();

    assert_eq!(once, twice);
}

#[rstest]
#[case(SortKey::Name)]
#[case(SortKey::Status)]
#[case(SortKey::EmployeeId)]
#[case(SortKey::Email)]
#[case(SortKey::Role)]
#[case(SortKey::CreatedAt)]
fn sort_toggle_cycles_with_period_three(mut view: DirectoryView, #[case] key: SortKey) {
    let start = view.sort();
    view.toggle_sort(key);
    assert_eq!(view.sort(), Some((key, SortDirection::Ascending)));
    view.toggle_sort(key);
    assert_eq!(view.sort(), Some((key, SortDirection::Descending)));
    view.toggle_sort(key);
    assert_eq!(view.sort(), start);
}

#[rstest]
fn sorting_another_column_starts_ascending(mut view: DirectoryView) {
    view.toggle_sort(SortKey::Name);
    view.toggle_sort(SortKey::Name);
    view.toggle_sort(SortKey::Role);
    assert_eq!(view.sort(), Some((SortKey::Role, SortDirection::Ascending)));
}

#[rstest]
fn name_sort_ignores_case(mut view: DirectoryView) {
    let roster = roster();
    view.toggle_sort(SortKey::Name);
    let page = view.apply(&roster);
    assert_eq!(
        names(&page.rows),
        [
            "Ada Lovelace",
            "Alan Turing",
            "barbara liskov",
            "Claude Shannon",
            "Grace Hopper",
        ]
    );

    view.toggle_sort(SortKey::Name);
    let page = view.apply(&roster);
    assert_eq!(page.rows.first().map(TeamMember::name), Some("Katherine Johnson"));
}

#[rstest]
fn date_sort_compares_timestamps(mut view: DirectoryView) {
    let roster = roster();
    view.toggle_sort(SortKey::CreatedAt);
    view.toggle_sort(SortKey::CreatedAt);
    let page = view.apply(&roster);
    assert_eq!(page.rows.first().map(TeamMember::name), Some("barbara liskov"));
}

#[rstest]
fn pagination_matches_ceiling_division(mut view: DirectoryView) {
    for size in 0..=16_i64 {
        let roster: Vec<TeamMember> = (0..size)
            .map(|index| member("Member", EmploymentStatus::FullTime, "Engineer", None, index))
            .collect();
        let total = roster.len();

        view.set_page(usize::MAX);
        let last = view.apply(&roster);

        assert_eq!(last.total, total);
        assert_eq!(last.page_count, total.div_ceil(5));
        if total == 0 {
            assert!(last.rows.is_empty());
            assert_eq!(last.page, 1);
        } else {
            assert_eq!(last.page, last.page_count);
            assert!((1..=5).contains(&last.rows.len()));
        }
    }
}

#[rstest]
#[case::search(|view: &mut DirectoryView| view.set_query("a"))]
#[case::status(|view: &mut DirectoryView| view.toggle_status(EmploymentStatus::FullTime))]
#[case::role(|view: &mut DirectoryView| view.toggle_role("Engineer"))]
#[case::category(|view: &mut DirectoryView| view.set_category(TeamCategory::All))]
#[case::clear(|view: &mut DirectoryView| view.clear_filters())]
fn filter_changes_return_to_page_one(
    mut view: DirectoryView,
    #[case] change: fn(&mut DirectoryView),
) {
    view.set_page(2);
    change(&mut view);
    assert_eq!(view.page(), 1);
}

#[rstest]
fn page_is_clamped_when_the_filtered_set_shrinks(mut view: DirectoryView) {
    let mut roster = roster();
    view.set_page(2);
    assert_eq!(view.apply(&roster).rows.len(), 2);

    roster.truncate(5);
    let page = view.apply(&roster);

    assert_eq!(page.page, 1);
    assert_eq!(view.page(), 1);
    assert_eq!(page.rows.len(), 5);
}

#[rstest]
fn role_options_are_distinct_and_sorted() {
    assert_eq!(
        DirectoryView::role_options(&roster()),
        ["Engineer", "Marketing", "Web Designer"]
    );
}
