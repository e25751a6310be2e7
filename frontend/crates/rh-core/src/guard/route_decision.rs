/// Where a rejected navigation is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Sign-in view, for visitors with no session
    Login,
    /// Default landing view, for signed-in users lacking the required flag
    Landing,
}

/// Outcome of evaluating an access level against the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view
    Allow,
    /// Replace-navigate to the target instead of rendering
    Redirect(RedirectTarget),
    /// Identity not resolved yet; hold the render, commit to nothing
    Pending,
}
