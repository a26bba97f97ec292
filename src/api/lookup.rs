use serde::Deserialize;
use thiserror::Error;

use crate::models::Role;

/// Profile data returned by the lookup collaborator. Extra fields in the
/// response are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Typed result of resolving a user id.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(UserProfile),
    /// The service answered but did not resolve the id (`success: false`
    /// or no user payload).
    NotFound,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct LookupEnvelope {
    success: bool,
    #[serde(default)]
    user: Option<UserProfile>,
}

/// Resolve a numeric user id to profile data via the external lookup
/// service. The endpoint contract is `POST /api/get-user` with a
/// `{"userId": <number>}` body.
pub async fn lookup_user(
    client: &reqwest::Client,
    base_url: &str,
    user_id: f64,
) -> Result<LookupOutcome, LookupError> {
    let url = format!("{}/api/get-user", base_url);
    let envelope: LookupEnvelope = client
        .post(&url)
        .json(&serde_json::json!({ "userId": user_id }))
        .send()
        .await?
        .json()
        .await?;

    match envelope {
        LookupEnvelope {
            success: true,
            user: Some(user),
        } => Ok(LookupOutcome::Found(user)),
        _ => Ok(LookupOutcome::NotFound),
    }
}
