pub mod error;
pub mod guard;
pub mod models;

pub use error::{CoreError, Result};
pub use guard::evaluate;
pub use guard::route_decision::{RedirectTarget, RouteDecision};
pub use models::access_level::AccessLevel;
pub use models::identity_state::IdentityState;
pub use models::role::Role;
pub use models::user_account::UserAccount;

#[cfg(test)]
mod tests;
