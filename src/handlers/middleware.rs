use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::api::{lookup_user, LookupError, LookupOutcome};
use crate::config::USER_ID_COOKIE;
use crate::error::ApiError;
use crate::models::{AppState, Role};

/// What the admin guard decided for a navigation.
///
/// Only a known non-Admin user gets `Forbidden`; every other failure
/// degrades to a login redirect.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    Forbidden,
}

pub async fn admin_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    match check_admin_access(&state, &jar).await {
        GuardOutcome::Allow => next.run(request).await,
        GuardOutcome::Forbidden => ApiError::Forbidden.into_response(),
        GuardOutcome::RedirectToLogin => Redirect::to("/login").into_response(),
    }
}

pub async fn check_admin_access(state: &AppState, jar: &CookieJar) -> GuardOutcome {
    let Some(raw_id) = jar.get(USER_ID_COOKIE).map(|c| c.value().to_string()) else {
        tracing::debug!("no user id cookie, redirecting to login");
        return GuardOutcome::RedirectToLogin;
    };

    let Ok(user_id) = raw_id.parse::<f64>() else {
        tracing::warn!(raw = %raw_id, "user id cookie is not numeric, redirecting to login");
        return GuardOutcome::RedirectToLogin;
    };

    tracing::debug!(user_id, "checking admin access");

    evaluate_lookup(lookup_user(&state.client, &state.lookup_base_url, user_id).await)
}

/// Map a lookup result to a guard decision.
pub fn evaluate_lookup(result: Result<LookupOutcome, LookupError>) -> GuardOutcome {
    match result {
        Ok(LookupOutcome::Found(user)) => {
            if user.role == Role::Admin {
                tracing::info!(name = %user.name, email = %user.email, "admin access granted");
                GuardOutcome::Allow
            } else {
                tracing::info!(name = %user.name, role = %user.role.label(), "access denied, user is not an admin");
                GuardOutcome::Forbidden
            }
        }
        Ok(LookupOutcome::NotFound) => {
            tracing::info!("user lookup did not resolve, redirecting to login");
            GuardOutcome::RedirectToLogin
        }
        Err(e) => {
            tracing::error!(%e, "error verifying admin access, redirecting to login");
            GuardOutcome::RedirectToLogin
        }
    }
}
