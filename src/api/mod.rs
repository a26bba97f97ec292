pub mod lookup;

pub use lookup::{lookup_user, LookupError, LookupOutcome, UserProfile};
