//! Authentication route handlers.
//!
//! Login, registration and logout against the in-memory [`AuthStore`]. On
//! success the session holds a [`CurrentUser`] that the front-end reads
//! back from `/api/auth/me`.
//!
//! [`AuthStore`]: crate::services::auth::AuthStore

use axum::{Json, extract::State, http::StatusCode};
use tower_sessions::Session;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::forms::{FormJson, LoginForm, RegisterForm};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::models::{Account, CurrentUser};
use crate::state::AppState;

/// Create an account and log it in.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    FormJson(form): FormJson<RegisterForm>,
) -> Result<(StatusCode, Json<CurrentUser>)> {
    let new_account = form.into_new_account()?;
    let account = state.auth().register(new_account).await?;

    let user = start_session(&session, &account).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    FormJson(form): FormJson<LoginForm>,
) -> Result<Json<CurrentUser>> {
    let (email, password) = form.into_credentials()?;
    let account = state.auth().login(&email, &password).await.inspect_err(|e| {
        tracing::warn!(error = %e, "login failed");
    })?;

    let user = start_session(&session, &account).await?;
    Ok(Json(user))
}

/// Log out, discarding the whole session.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}

/// The logged-in user.
pub async fn me(RequireAuth(user): RequireAuth) -> Json<CurrentUser> {
    Json(user)
}

async fn start_session(session: &Session, account: &Account) -> Result<CurrentUser> {
    let user = CurrentUser::from(account);
    set_current_user(session, &user).await?;
    set_sentry_user(&user.id, Some(user.email.as_str()));
    tracing::info!(account_id = %user.id, "session started");
    Ok(user)
}
