//! Tests for team member values.

use mockable::DefaultClock;
use rstest::rstest;

use crate::team::domain::{EmploymentStatus, MemberDraft, TeamDomainError, TeamMember};

fn draft() -> MemberDraft {
    MemberDraft::new(
        "Ada Lovelace",
        EmploymentStatus::FullTime,
        "EMP-001",
        "ada@example.com",
        "Web Designer",
    )
}

#[rstest]
#[case("Full Time", EmploymentStatus::FullTime)]
#[case("Part Time", EmploymentStatus::PartTime)]
#[case("Internship", EmploymentStatus::Internship)]
fn statuses_parse_their_display_text(#[case] raw: &str, #[case] status: EmploymentStatus) {
    assert_eq!(EmploymentStatus::try_from(raw), Ok(status));
    assert_eq!(status.to_string(), raw);
}

#[rstest]
#[case("full time")]
#[case("Contractor")]
fn unknown_statuses_are_rejected(#[case] raw: &str) {
    assert!(EmploymentStatus::try_from(raw).is_err());
}

#[rstest]
#[case(MemberDraft::new(" ", EmploymentStatus::FullTime, "E1", "a@b.c", "Role"), "name")]
#[case(MemberDraft::new("Ada", EmploymentStatus::FullTime, "", "a@b.c", "Role"), "employee id")]
#[case(MemberDraft::new("Ada", EmploymentStatus::FullTime, "E1", "\t", "Role"), "email")]
#[case(MemberDraft::new("Ada", EmploymentStatus::FullTime, "E1", "a@b.c", ""), "role")]
fn incomplete_drafts_name_the_missing_field(
    #[case] draft: MemberDraft,
    #[case] field: &'static str,
) {
    assert_eq!(draft.validate(), Err(TeamDomainError::MissingField(field)));
}

#[rstest]
fn new_member_keeps_the_typed_values() {
    let member = TeamMember::new(draft().with_team("Product"), &DefaultClock)
        .expect("draft should be complete");
    assert_eq!(member.name(), "Ada Lovelace");
    assert_eq!(member.team(), Some("Product"));
    assert_eq!(member.avatar(), None);
}

#[rstest]
fn apply_draft_replaces_editable_fields_only() {
    let mut member = TeamMember::new(draft(), &DefaultClock).expect("draft should be complete");
    let id = member.id();
    let created_at = member.created_at();
    let edit = MemberDraft::new(
        "Ada King",
        EmploymentStatus::PartTime,
        "EMP-001",
        "ada.king@example.com",
        "Design Lead",
    );

    member.apply_draft(&edit).expect("edit should be complete");

    assert_eq!(member.id(), id);
    assert_eq!(member.created_at(), created_at);
    assert_eq!(member.name(), "Ada King");
    assert_eq!(member.status(), EmploymentStatus::PartTime);
    assert_eq!(member.role(), "Design Lead");
}
