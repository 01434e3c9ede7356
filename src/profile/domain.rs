//! Profile record and its partial update.

use crate::auth::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Ages offered by the profile form.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=67;

/// Occupations offered by the profile form.
pub const OCCUPATIONS: [&str; 11] = [
    "Student",
    "Teacher",
    "Engineer",
    "Doctor",
    "HR",
    "Project Manager",
    "Designer",
    "Architect",
    "Accountant",
    "Lawyer",
    "Other",
];

/// Errors returned while validating profile input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileDomainError {
    /// The age lies outside [`AGE_RANGE`].
    #[error("age {0} is outside the accepted range 18 to 67")]
    AgeOutOfRange(u8),
}

/// Personal details attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    full_name: Option<String>,
    avatar_url: Option<String>,
    bio: Option<String>,
    age: Option<u8>,
    date_of_birth: Option<NaiveDate>,
    occupation: Option<String>,
    linkedin_url: Option<String>,
    twitter_url: Option<String>,
    github_url: Option<String>,
    updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a profile with no details filled in.
    #[must_use]
    pub const fn blank(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: None,
            avatar_url: None,
            bio: None,
            age: None,
            date_of_birth: None,
            occupation: None,
            linkedin_url: None,
            twitter_url: None,
            github_url: None,
            updated_at,
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name, if set.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Returns the avatar, if set.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the biography, if set.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Returns the age, if set.
    #[must_use]
    pub const fn age(&self) -> Option<u8> {
        self.age
    }

    /// Returns the date of birth, if set.
    #[must_use]
    pub const fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// Returns the occupation, if set.
    #[must_use]
    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }

    /// Returns the social links as `(linkedin, twitter, github)`.
    #[must_use]
    pub fn social_links(&self) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            self.linkedin_url.as_deref(),
            self.twitter_url.as_deref(),
            self.github_url.as_deref(),
        )
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a validated patch.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::AgeOutOfRange`] when the patch carries
    /// an age the form does not offer. The profile is left untouched.
    pub fn apply(
        &mut self,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> Result<(), ProfileDomainError> {
        patch.validate()?;
        let text_fields = [
            (&mut self.full_name, &patch.full_name),
            (&mut self.avatar_url, &patch.avatar_url),
            (&mut self.bio, &patch.bio),
            (&mut self.occupation, &patch.occupation),
            (&mut self.linkedin_url, &patch.linkedin_url),
            (&mut self.twitter_url, &patch.twitter_url),
            (&mut self.github_url, &patch.github_url),
        ];
        for (field, update) in text_fields {
            if let Some(value) = update {
                field.clone_from(value);
            }
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        self.updated_at = updated_at;
        Ok(())
    }
}

/// Partial update of a profile.
///
/// `None` leaves a field untouched; `Some(None)` clears it. Blank text
/// clears a text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    full_name: Option<Option<String>>,
    avatar_url: Option<Option<String>>,
    bio: Option<Option<String>>,
    age: Option<Option<u8>>,
    date_of_birth: Option<Option<NaiveDate>>,
    occupation: Option<Option<String>>,
    linkedin_url: Option<Option<String>>,
    twitter_url: Option<Option<String>>,
    github_url: Option<Option<String>>,
}

fn text(value: Option<String>) -> Option<Option<String>> {
    Some(value.filter(|text| !text.trim().is_empty()))
}

impl ProfilePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the display name.
    #[must_use]
    pub fn with_full_name(mut self, value: Option<String>) -> Self {
        self.full_name = text(value);
        self
    }

    /// Sets or clears the avatar.
    #[must_use]
    pub fn with_avatar_url(mut self, value: Option<String>) -> Self {
        self.avatar_url = text(value);
        self
    }

    /// Sets or clears the biography.
    #[must_use]
    pub fn with_bio(mut self, value: Option<String>) -> Self {
        self.bio = text(value);
        self
    }

    /// Sets or clears the age.
    #[must_use]
    pub fn with_age(mut self, value: Option<u8>) -> Self {
        self.age = Some(value);
        self
    }

    /// Sets or clears the date of birth.
    #[must_use]
    pub fn with_date_of_birth(mut self, value: Option<NaiveDate>) -> Self {
        self.date_of_birth = Some(value);
        self
    }

    /// Sets or clears the occupation.
    #[must_use]
    pub fn with_occupation(mut self, value: Option<String>) -> Self {
        self.occupation = text(value);
        self
    }

    /// Sets or clears the social links.
    #[must_use]
    pub fn with_social_links(
        mut self,
        linkedin: Option<String>,
        twitter: Option<String>,
        github: Option<String>,
    ) -> Self {
        self.linkedin_url = text(linkedin);
        self.twitter_url = text(twitter);
        self.github_url = text(github);
        self
    }

    /// Checks the patch before it is applied anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::AgeOutOfRange`] for an age outside
    /// [`AGE_RANGE`].
    pub fn validate(&self) -> Result<(), ProfileDomainError> {
        match self.age {
            Some(Some(age)) if !AGE_RANGE.contains(&age) => {
                Err(ProfileDomainError::AgeOutOfRange(age))
            }
            _ => Ok(()),
        }
    }
}
