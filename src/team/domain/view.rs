//! Filter, sort and pagination state for the team directory.
//!
//! The view is ephemeral: it is rebuilt whenever the directory is opened
//! and never stored.

use super::{EmploymentStatus, TeamMember};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Team selector at the top of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TeamCategory {
    /// Every member regardless of team.
    #[default]
    All,
    /// Members whose team label equals the name.
    Named(String),
}

impl TeamCategory {
    fn admits(&self, member: &TeamMember) -> bool {
        match self {
            Self::All => true,
            Self::Named(team) => member.team() == Some(team.as_str()),
        }
    }
}

/// Sortable directory column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Full name.
    Name,
    /// Employment status text.
    Status,
    /// Employee id.
    EmployeeId,
    /// Email address.
    Email,
    /// Job title.
    Role,
    /// Creation time.
    CreatedAt,
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// One page of the filtered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPage {
    /// Members on this page.
    pub rows: Vec<TeamMember>,
    /// One-based page number after clamping.
    pub page: usize,
    /// Number of pages; zero when nothing matches.
    pub page_count: usize,
    /// Number of members that passed the filters.
    pub total: usize,
}

/// Category, search, checkbox filters, sort and page of the directory.
///
/// Filters run in a fixed order and are ANDed: category, then the search
/// query across name, email, employee id and role, then the status set,
/// then the role set. An empty set admits everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    category: TeamCategory,
    query: String,
    statuses: BTreeSet<EmploymentStatus>,
    roles: BTreeSet<String>,
    sort: Option<(SortKey, SortDirection)>,
    page: usize,
    page_size: NonZeroUsize,
}

impl DirectoryView {
    /// Creates an unfiltered, unsorted view on page one.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            category: TeamCategory::All,
            query: String::new(),
            statuses: BTreeSet::new(),
            roles: BTreeSet::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    /// Returns the selected category.
    #[must_use]
    pub const fn category(&self) -> &TeamCategory {
        &self.category
    }

    /// Returns the search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the active sort, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<(SortKey, SortDirection)> {
        self.sort
    }

    /// Returns the current one-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Selects a category and returns to page one.
    pub fn set_category(&mut self, category: TeamCategory) {
        self.category = category;
        self.page = 1;
    }

    /// Replaces the search query and returns to page one.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Ticks or unticks a status checkbox and returns to page one.
    pub fn toggle_status(&mut self, status: EmploymentStatus) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
        self.page = 1;
    }

    /// Ticks or unticks a role checkbox and returns to page one.
    pub fn toggle_role(&mut self, role: impl Into<String>) {
        let role = role.into();
        if !self.roles.remove(&role) {
            self.roles.insert(role);
        }
        self.page = 1;
    }

    /// Unticks every checkbox and returns to page one.
    pub fn clear_filters(&mut self) {
        self.statuses.clear();
        self.roles.clear();
        self.page = 1;
    }

    /// Advances the sort for a column header click.
    ///
    /// Clicking the sorted column cycles ascending, descending, unsorted.
    /// Clicking another column starts it ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == key => {
                Some((key, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == key => None,
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    /// Requests a page. Values below one become one; the upper bound is
    /// enforced by [`DirectoryView::apply`].
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Returns the members that pass every filter, in roster order.
    #[must_use]
    pub fn filter<'a>(&self, roster: &'a [TeamMember]) -> Vec<&'a TeamMember> {
        let needle = self.query.to_lowercase();
        roster
            .iter()
            .filter(|member| self.category.admits(member))
            .filter(|member| needle.is_empty() || matches_search(member, &needle))
            .filter(|member| self.statuses.is_empty() || self.statuses.contains(&member.status()))
            .filter(|member| self.roles.is_empty() || self.roles.contains(member.role()))
            .collect()
    }

    /// Filters, sorts and slices the roster into the current page.
    ///
    /// The stored page is clamped to the last page when the filtered set has
    /// shrunk below it.
    pub fn apply(&mut self, roster: &[TeamMember]) -> DirectoryPage {
        let mut matches = self.filter(roster);
        if let Some((key, direction)) = self.sort {
            matches.sort_by(|left, right| {
                let ordering = compare(key, left, right);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total = matches.len();
        let size = self.page_size.get();
        let page_count = total.div_ceil(size);
        self.page = self.page.clamp(1, page_count.max(1));
        let rows = matches
            .into_iter()
            .skip((self.page - 1) * size)
            .take(size)
            .cloned()
            .collect();

        DirectoryPage {
            rows,
            page: self.page,
            page_count,
            total,
        }
    }

    /// Returns the distinct roles in the roster for the role checkboxes.
    #[must_use]
    pub fn role_options(roster: &[TeamMember]) -> Vec<String> {
        roster
            .iter()
            .map(|member| member.role().to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn matches_search(member: &TeamMember, needle: &str) -> bool {
    [
        member.name(),
        member.email(),
        member.employee_id(),
        member.role(),
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive comparison with a byte-wise tiebreak, so names that
/// differ only in case still sort deterministically.
fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

fn compare(key: SortKey, left: &TeamMember, right: &TeamMember) -> Ordering {
    match key {
        SortKey::Name => compare_text(left.name(), right.name()),
        SortKey::Status => compare_text(left.status().as_str(), right.status().as_str()),
        SortKey::EmployeeId => compare_text(left.employee_id(), right.employee_id()),
        SortKey::Email => compare_text(left.email(), right.email()),
        SortKey::Role => compare_text(left.role(), right.role()),
        SortKey::CreatedAt => left.created_at().cmp(&right.created_at()),
    }
}
