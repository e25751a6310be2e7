pub mod composer;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod registry;
pub mod route;
pub mod route_pattern;
pub mod view;

pub use composer::NavigationComposer;
pub use error::{NavError, Result};
pub use menu::{MenuItem, account_menu, main_menu};
pub use navigation::Navigation;
pub use registry::ViewRegistry;
pub use route::Route;
pub use route_pattern::{RouteParams, RoutePattern};
pub use view::View;

/// Path of the sign-in view
pub const LOGIN_PATH: &str = "/login";
/// Landing path for signed-in users
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";
/// Entry path for anonymous visitors
pub const PUBLIC_ENTRY_PATH: &str = "/";

#[cfg(test)]
mod tests;
