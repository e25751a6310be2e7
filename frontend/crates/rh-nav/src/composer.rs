use crate::navigation::Navigation;
use crate::registry::ViewRegistry;
use crate::view::View;
use crate::{DEFAULT_LANDING_PATH, LOGIN_PATH, PUBLIC_ENTRY_PATH};

use rh_core::{IdentityState, RedirectTarget, Role, RouteDecision, evaluate};

use log::debug;

/// Turns a requested path and the current identity into a [`Navigation`]
/// outcome, applying the guard to the matched route.
#[derive(Debug, Clone)]
pub struct NavigationComposer {
    registry: ViewRegistry,
}

impl NavigationComposer {
    pub fn new(registry: ViewRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Resolve a path against the route table and the guard.
    ///
    /// Guest-only routes bounce signed-in users to the default landing.
    /// Unmatched paths follow the wildcard policy: signed-in users land on
    /// the default landing, visitors on the public entry view. While the
    /// identity is still unknown every non-public outcome holds as
    /// [`Navigation::Pending`].
    pub fn resolve(&self, path: &str, identity: &IdentityState) -> Navigation {
        let Some((route, params)) = self.registry.find(path) else {
            return self.resolve_unmatched(path, identity);
        };

        if route.is_guest_only() {
            match identity {
                IdentityState::Unknown => return Navigation::Pending,
                IdentityState::Present(_) => {
                    debug!("Signed-in visit to {path}, replacing with {DEFAULT_LANDING_PATH}");
                    return Navigation::Redirect {
                        to: DEFAULT_LANDING_PATH.to_string(),
                    };
                }
                IdentityState::Anonymous => {}
            }
        }

        match evaluate(route.access(), identity) {
            RouteDecision::Allow => Navigation::Render {
                view: dispatch_view(route.view(), identity),
                params,
            },
            RouteDecision::Redirect(target) => {
                let to = match target {
                    RedirectTarget::Login => LOGIN_PATH,
                    RedirectTarget::Landing => DEFAULT_LANDING_PATH,
                };
                debug!(
                    "Access '{}' not met for {path}, replacing with {to}",
                    route.access()
                );
                Navigation::Redirect { to: to.to_string() }
            }
            RouteDecision::Pending => Navigation::Pending,
        }
    }

    fn resolve_unmatched(&self, path: &str, identity: &IdentityState) -> Navigation {
        match identity {
            IdentityState::Unknown => Navigation::Pending,
            IdentityState::Present(_) => {
                debug!("No route for {path}, replacing with {DEFAULT_LANDING_PATH}");
                Navigation::Redirect {
                    to: DEFAULT_LANDING_PATH.to_string(),
                }
            }
            IdentityState::Anonymous => {
                debug!("No route for {path}, replacing with {PUBLIC_ENTRY_PATH}");
                Navigation::Redirect {
                    to: PUBLIC_ENTRY_PATH.to_string(),
                }
            }
        }
    }
}

/// The landing route has no fixed view: it dispatches by role, admin
/// first, then employer, then candidate.
fn dispatch_view(view: View, identity: &IdentityState) -> View {
    if view != View::Dashboard {
        return view;
    }

    match identity.role() {
        Some(Role::Admin) => View::AdminDashboard,
        Some(Role::Employer) => View::EmployerDashboard,
        _ => View::CandidateDashboard,
    }
}
