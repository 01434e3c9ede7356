//! Shared fixtures for the in-memory flow tests.

use std::sync::Arc;

use collabworks::auth::{
    adapters::InMemoryAuthProvider,
    domain::{Credentials, SignUpRequest},
    ports::AuthProvider,
};
use collabworks::notification::RecordingNotifier;
use collabworks::project::{adapters::InMemoryWorkspaceStore, services::ProjectCatalogService};
use eyre::Result;
use mockable::DefaultClock;
use rstest::fixture;

/// Email of the account every signed-in flow uses.
pub const EMAIL: &str = "ada@example.com";
/// Password of that account.
pub const PASSWORD: &str = "analytical engine";

/// Catalog service type wired to in-memory adapters.
pub type Catalog = ProjectCatalogService<
    InMemoryWorkspaceStore,
    InMemoryAuthProvider,
    RecordingNotifier,
    DefaultClock,
>;

/// In-memory workspace shared by one test.
pub struct Workspace {
    pub store: InMemoryWorkspaceStore,
    pub auth: InMemoryAuthProvider,
    pub notifier: Arc<RecordingNotifier>,
    pub catalog: Catalog,
}

impl Workspace {
    /// Registers the test account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider rejects either call.
    pub async fn sign_in(&self) -> Result<()> {
        self.auth
            .sign_up(&SignUpRequest::new(EMAIL, PASSWORD, "Ada Lovelace")?)
            .await?;
        self.auth.sign_in(&Credentials::new(EMAIL, PASSWORD)?).await?;
        Ok(())
    }

    /// Returns the title of the most recent toast.
    #[must_use]
    pub fn last_toast_title(&self) -> Option<String> {
        self.notifier.last().map(|toast| toast.title().to_owned())
    }
}

/// Provides an empty workspace with nobody signed in.
#[fixture]
pub fn workspace() -> Workspace {
    let store = InMemoryWorkspaceStore::new();
    let auth = InMemoryAuthProvider::new();
    let notifier = Arc::new(RecordingNotifier::new());
    let catalog = ProjectCatalogService::new(
        Arc::new(store.clone()),
        Arc::new(auth.clone()),
        Arc::clone(&notifier),
        Arc::new(DefaultClock),
    );
    Workspace {
        store,
        auth,
        notifier,
        catalog,
    }
}
