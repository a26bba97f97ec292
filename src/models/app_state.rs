use crate::services::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// The on-disk login store.
    pub store: UserStore,
    /// Shared outbound HTTP client for the user-lookup collaborator.
    pub client: reqwest::Client,
    /// Base URL of the lookup service resolving a user id to profile data.
    pub lookup_base_url: String,
}
