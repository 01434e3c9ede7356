//! Unit tests for the team context.

mod domain_tests;
mod view_tests;

use chrono::{Duration, TimeZone, Utc};

use crate::team::domain::{EmploymentStatus, MemberId, PersistedMemberData, TeamMember};

pub(super) fn member(
    name: &str,
    status: EmploymentStatus,
    role: &str,
    team: Option<&str>,
    minutes: i64,
) -> TeamMember {
    let created = Utc
        .with_ymd_and_hms(2025, 1, 6, 8, 0, 0)
        .single()
        .expect("base time should be unambiguous");
    let handle = name.to_lowercase().replace(' ', ".");
    TeamMember::from_persisted(PersistedMemberData {
        id: MemberId::new(),
        name: name.to_owned(),
        status,
        employee_id: format!("EMP-{minutes:03}"),
        email: format!("{handle}@example.com"),
        role: role.to_owned(),
        avatar: None,
        team: team.map(str::to_owned),
        created_at: created + Duration::minutes(minutes),
    })
}

/// Seven people across two teams and three statuses.
pub(super) fn roster() -> Vec<TeamMember> {
    vec![
        member("Ada Lovelace", EmploymentStatus::FullTime, "Web Designer", Some("Product"), 0),
        member("Grace Hopper", EmploymentStatus::FullTime, "Engineer", Some("Platform"), 1),
        member("Alan Turing", EmploymentStatus::PartTime, "Engineer", Some("Platform"), 2),
        member("Joan Clarke", EmploymentStatus::Internship, "Marketing", Some("Product"), 3),
        member("Katherine Johnson", EmploymentStatus::FullTime, "Web Designer", Some("Product"), 4),
        member("Claude Shannon", EmploymentStatus::PartTime, "Marketing", None, 5),
        member("barbara liskov", EmploymentStatus::FullTime, "Engineer", Some("Platform"), 6),
    ]
}
