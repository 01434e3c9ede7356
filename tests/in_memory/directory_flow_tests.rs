//! Team roster writes observed through a paginated directory view.

use std::sync::Arc;

use collabworks::config::AppConfig;
use collabworks::notification::RecordingNotifier;
use collabworks::team::{
    adapters::InMemoryTeamRepository,
    domain::{DirectoryView, EmploymentStatus, MemberDraft, SortKey, TeamCategory},
    services::TeamDirectoryService,
};
use eyre::{Result, ensure};
use mockable::DefaultClock;
use rstest::rstest;

const STAFF: [(&str, EmploymentStatus, &str, &str); 6] = [
    ("Grace Hopper", EmploymentStatus::FullTime, "Engineer", "Platform"),
    ("Ada Lovelace", EmploymentStatus::FullTime, "Web Designer", "Product"),
    ("Alan Turing", EmploymentStatus::PartTime, "Engineer", "Platform"),
    ("Joan Clarke", EmploymentStatus::Internship, "Marketing", "Product"),
    ("Katherine Johnson", EmploymentStatus::FullTime, "Web Designer", "Product"),
    ("Edsger Dijkstra", EmploymentStatus::PartTime, "Engineer", "Platform"),
];

fn draft(
    index: usize,
    (name, status, role, team): (&str, EmploymentStatus, &str, &str),
) -> MemberDraft {
    let handle = name.to_lowercase().replace(' ', ".");
    MemberDraft::new(
        name,
        status,
        format!("EMP-{index:03}"),
        format!("{handle}@example.com"),
        role,
    )
    .with_team(team)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_changes_reshape_the_visible_page() -> Result<()> {
    let service = TeamDirectoryService::new(
        Arc::new(InMemoryTeamRepository::new()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(DefaultClock),
    );
    for (index, entry) in STAFF.into_iter().enumerate() {
        service.create_member(draft(index, entry)).await?;
    }

    let mut view = DirectoryView::new(AppConfig::default().page_size);
    view.toggle_sort(SortKey::Name);
    view.set_page(2);
    let page = view.apply(&service.roster());
    ensure!(page.page_count == 2);
    ensure!(page.rows.len() == 1);
    ensure!(page.rows.first().map(|member| member.name()) == Some("Katherine Johnson"));

    let last = page
        .rows
        .first()
        .map(|member| member.id())
        .ok_or_else(|| eyre::eyre!("page two should have a row"))?;
    service.delete_member(last).await?;

    let page = view.apply(&service.roster());
    ensure!(page.page == 1);
    ensure!(page.page_count == 1);
    ensure!(page.rows.first().map(|member| member.name()) == Some("Ada Lovelace"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_and_search_narrow_the_roster() -> Result<()> {
    let service = TeamDirectoryService::new(
        Arc::new(InMemoryTeamRepository::new()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(DefaultClock),
    );
    for (index, entry) in STAFF.into_iter().enumerate() {
        service.create_member(draft(index, entry)).await?;
    }

    let mut view = DirectoryView::new(AppConfig::default().page_size);
    view.set_category(TeamCategory::Named("Platform".to_owned()));
    view.toggle_status(EmploymentStatus::PartTime);
    view.set_query("dijk");
    let page = view.apply(&service.roster());

    ensure!(page.total == 1);
    ensure!(page.rows.first().map(|member| member.email()) == Some("edsger.dijkstra@example.com"));
    Ok(())
}
