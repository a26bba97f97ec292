use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::{AppState, UserSummary};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub success: bool,
    pub users: Vec<UserSummary>,
    pub total_users: usize,
}

/// Admin-only view of every recorded login, passwords omitted. Reached
/// only through the admin guard.
pub async fn admin_dashboard(State(state): State<AppState>) -> Json<AdminDashboard> {
    let records = state.store.load().await;
    let users: Vec<UserSummary> = records.iter().map(UserSummary::from).collect();
    Json(AdminDashboard {
        success: true,
        total_users: users.len(),
        users,
    })
}
