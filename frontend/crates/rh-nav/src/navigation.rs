use crate::route_pattern::RouteParams;
use crate::view::View;

/// Resolved outcome for a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the view with the parameters captured from the path
    Render { view: View, params: RouteParams },
    /// Replace-navigate to `to`. Hosts must replace rather than push so
    /// the back button never loops through the rejected path.
    Redirect { to: String },
    /// Identity not resolved yet; render nothing and navigate nowhere
    Pending,
}
