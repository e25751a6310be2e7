pub mod route_decision;

use crate::models::access_level::AccessLevel;
use crate::models::identity_state::IdentityState;

pub use route_decision::{RedirectTarget, RouteDecision};

/// Decide whether a view with the given access level renders for the
/// current identity.
///
/// Total and side-effect free, so callers may re-evaluate on every
/// navigation pass. Checks run in a fixed order, first match wins:
///
/// 1. `Public` always renders.
/// 2. An unresolved identity holds every guarded view (`Pending`).
/// 3. No session redirects to login, whatever level was asked for.
/// 4. `Authenticated` renders for any session.
/// 5. `Employer` / `Admin` render only with the matching flag; a session
///    without it goes to the default landing, not to login.
pub fn evaluate(access: AccessLevel, identity: &IdentityState) -> RouteDecision {
    if access == AccessLevel::Public {
        return RouteDecision::Allow;
    }

    let user = match identity {
        IdentityState::Unknown => return RouteDecision::Pending,
        IdentityState::Anonymous => return RouteDecision::Redirect(RedirectTarget::Login),
        IdentityState::Present(user) => user,
    };

    match access {
        AccessLevel::Public | AccessLevel::Authenticated => RouteDecision::Allow,
        AccessLevel::Employer if user.is_employer => RouteDecision::Allow,
        AccessLevel::Admin if user.is_admin => RouteDecision::Allow,
        AccessLevel::Employer | AccessLevel::Admin => {
            RouteDecision::Redirect(RedirectTarget::Landing)
        }
    }
}
