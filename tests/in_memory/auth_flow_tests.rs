//! Gate decisions across a full account lifecycle.

use std::sync::Arc;

use collabworks::auth::{
    adapters::InMemoryAuthProvider,
    domain::GateDecision,
    services::{AuthContext, AuthServiceError},
};
use collabworks::navigation::Route;
use collabworks::notification::RecordingNotifier;
use eyre::{Result, ensure};
use rstest::rstest;

use super::helpers::{EMAIL, PASSWORD};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_lifecycle_drives_the_gate() -> Result<()> {
    let provider = InMemoryAuthProvider::new();
    let notifier = Arc::new(RecordingNotifier::new());
    let context = AuthContext::mount(Arc::new(provider), Arc::clone(&notifier)).await;
    ensure!(context.gate() == GateDecision::Redirect(Route::SignIn));

    ensure!(context.sign_up(EMAIL, PASSWORD, "Ada Lovelace").await? == Route::SignIn);
    ensure!(context.gate() == GateDecision::Redirect(Route::SignIn));

    ensure!(context.sign_in(EMAIL, PASSWORD).await? == Route::Dashboard);
    ensure!(context.gate() == GateDecision::Render);

    ensure!(matches!(
        context.delete_account("someone@example.com").await,
        Err(AuthServiceError::EmailMismatch)
    ));
    ensure!(context.gate() == GateDecision::Render);

    ensure!(context.delete_account(EMAIL).await? == Route::SignIn);
    ensure!(context.gate() == GateDecision::Redirect(Route::SignIn));
    ensure!(context.sign_in(EMAIL, PASSWORD).await.is_err());
    ensure!(notifier.last().is_some_and(|toast| toast.is_destructive()));
    context.unmount();
    Ok(())
}
