use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// One recorded login, as persisted in the users store.
///
/// The password is kept exactly as submitted; it is written to the store
/// but never included in any response payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Epoch milliseconds plus a random fraction; uniqueness is only
    /// probabilistic.
    pub id: f64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Caller-supplied timestamp, or the server's time of recording.
    pub login_time: String,
    pub created_at: String,
}

/// The password-free view of a record returned to callers.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: f64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub login_time: String,
}

impl From<&UserRecord> for UserSummary {
    fn from(record: &UserRecord) -> Self {
        UserSummary {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
            login_time: record.login_time.clone(),
        }
    }
}
