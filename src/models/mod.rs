pub mod app_state;
pub mod role;
pub mod user_record;

pub use app_state::AppState;
pub use role::Role;
pub use user_record::{UserRecord, UserSummary};
