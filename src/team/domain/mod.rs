//! Domain model for team members and the directory view.

mod error;
mod ids;
mod member;
mod view;

pub use error::{ParseEmploymentStatusError, TeamDomainError};
pub use ids::MemberId;
pub use member::{EmploymentStatus, MemberDraft, PersistedMemberData, TeamMember};
pub use view::{DirectoryPage, DirectoryView, SortDirection, SortKey, TeamCategory};
