//! Team member record and the form input that creates or edits it.

use super::{MemberId, ParseEmploymentStatusError, TeamDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment arrangement shown as a coloured badge in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Full-time employee.
    #[serde(rename = "Full Time")]
    FullTime,
    /// Part-time employee.
    #[serde(rename = "Part Time")]
    PartTime,
    /// Intern.
    #[serde(rename = "Internship")]
    Internship,
}

impl EmploymentStatus {
    /// Every status in form order.
    pub const ALL: [Self; 3] = [Self::FullTime, Self::PartTime, Self::Internship];

    /// Returns the stored and displayed text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Internship => "Internship",
        }
    }
}

impl TryFrom<&str> for EmploymentStatus {
    type Error = ParseEmploymentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseEmploymentStatusError(value.to_owned()))
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form input for adding or editing a team member.
///
/// Name, employee id, email and role are required; values are kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    name: String,
    status: EmploymentStatus,
    employee_id: String,
    email: String,
    role: String,
    avatar: Option<String>,
    team: Option<String>,
}

impl MemberDraft {
    /// Creates a draft from the required form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: EmploymentStatus,
        employee_id: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            employee_id: employee_id.into(),
            email: email.into(),
            role: role.into(),
            avatar: None,
            team: None,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Places the member in a named team.
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Returns the name as typed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::MissingField`] naming the first blank
    /// field.
    pub fn validate(&self) -> Result<(), TeamDomainError> {
        let required = [
            ("name", &self.name),
            ("employee id", &self.employee_id),
            ("email", &self.email),
            ("role", &self.role),
        ];
        match required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((field, _)) => Err(TeamDomainError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// One row of the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: String,
    status: EmploymentStatus,
    employee_id: String,
    email: String,
    role: String,
    avatar: Option<String>,
    team: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMemberData {
    /// Persisted identifier.
    pub id: MemberId,
    /// Full name.
    pub name: String,
    /// Employment arrangement.
    pub status: EmploymentStatus,
    /// Organization-issued employee id.
    pub employee_id: String,
    /// Contact email.
    pub email: String,
    /// Job title.
    pub role: String,
    /// Avatar URL, if any.
    pub avatar: Option<String>,
    /// Team label, if any.
    pub team: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    /// Creates a member from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::MissingField`] when the draft is
    /// incomplete.
    pub fn new(draft: MemberDraft, clock: &impl Clock) -> Result<Self, TeamDomainError> {
        draft.validate()?;
        Ok(Self {
            id: MemberId::new(),
            name: draft.name,
            status: draft.status,
            employee_id: draft.employee_id,
            email: draft.email,
            role: draft.role,
            avatar: draft.avatar,
            team: draft.team,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a member from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedMemberData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            status: data.status,
            employee_id: data.employee_id,
            email: data.email,
            role: data.role,
            avatar: data.avatar,
            team: data.team,
            created_at: data.created_at,
        }
    }

    /// Replaces every editable field with the draft's values.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::MissingField`] when the draft is
    /// incomplete. The member is left untouched in that case.
    pub fn apply_draft(&mut self, draft: &MemberDraft) -> Result<(), TeamDomainError> {
        draft.validate()?;
        self.name.clone_from(&draft.name);
        self.status = draft.status;
        self.employee_id.clone_from(&draft.employee_id);
        self.email.clone_from(&draft.email);
        self.role.clone_from(&draft.role);
        self.avatar.clone_from(&draft.avatar);
        self.team.clone_from(&draft.team);
        Ok(())
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employment arrangement.
    #[must_use]
    pub const fn status(&self) -> EmploymentStatus {
        self.status
    }

    /// Returns the employee id.
    #[must_use]
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the job title.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the avatar URL, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Returns the team label, if any.
    #[must_use]
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
