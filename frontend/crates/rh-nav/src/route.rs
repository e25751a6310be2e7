use crate::error::Result as NavResult;
use crate::route_pattern::RoutePattern;
use crate::view::View;

use rh_core::AccessLevel;

/// One declared route: a path pattern, the view it renders, and the
/// access level the guard enforces for it.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    view: View,
    access: AccessLevel,
    guest_only: bool,
}

impl Route {
    pub fn new(pattern: &str, view: View, access: AccessLevel) -> NavResult<Self> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            view,
            access,
            guest_only: false,
        })
    }

    /// A public route that signed-in users are bounced away from, like the
    /// login and registration views.
    pub fn guest_only(pattern: &str, view: View) -> NavResult<Self> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            view,
            access: AccessLevel::Public,
            guest_only: true,
        })
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn access(&self) -> AccessLevel {
        self.access
    }

    pub fn is_guest_only(&self) -> bool {
        self.guest_only
    }
}
