use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{AppState, UserRecord, UserSummary};
use crate::services::validate_submission;
use crate::utils::{generate_record_id, now_iso};

/// Login submission body. Required fields are optional here so that a
/// missing field produces the recorder's own 400 message instead of a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "loginTime")]
    pub login_time: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserSummary,
    pub total_users: usize,
}

/// The Login Recorder: validate the submission, append it to the store,
/// return a password-free summary.
pub async fn login_post(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let submission = validate_submission(&body)?;

    let record = UserRecord {
        id: generate_record_id(),
        name: submission.name,
        email: submission.email,
        password: submission.password,
        role: submission.role,
        login_time: submission.login_time.unwrap_or_else(now_iso),
        created_at: now_iso(),
    };
    let user = UserSummary::from(&record);

    let total_users = match state.store.append(record).await {
        Ok(total) => total,
        Err(e) => {
            tracing::error!(%e, "failed to save user login data");
            return Err(ApiError::Internal);
        }
    };

    tracing::info!(
        name = %user.name,
        email = %user.email,
        role = %user.role.label(),
        "new login recorded"
    );

    Ok(Json(LoginResponse {
        success: true,
        message: "User login data saved successfully".into(),
        user,
        total_users,
    }))
}

/// Fallback for non-POST requests on the login endpoint.
pub async fn login_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Landing target for guard redirects. The portal UI is served
/// elsewhere; this endpoint only states how to authenticate.
pub async fn login_get() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Authentication required. Submit credentials to POST /api/login."
    }))
}

pub async fn root_get() -> Redirect {
    Redirect::to("/login")
}
