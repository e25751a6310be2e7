use rh_core::{IdentityState, Role};

/// One navigation chrome link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem { label, path }
}

/// Role links for the navigation bar. Empty until an identity is present;
/// visitors and the pre-restore window get no chrome links at all.
pub fn main_menu(identity: &IdentityState) -> Vec<MenuItem> {
    match identity.role() {
        Some(Role::Admin) => vec![
            item("Manage Jobs", "/adminjobs/manage"),
            item("Manage Blogs", "/blogs/manage"),
            item("Manage Contracts", "/contracttemplate/manage"),
            item("Manage Users", "/admin/manageusers"),
        ],
        Some(Role::Employer) => vec![
            item("Manage Jobs", "/jobs/manage"),
            item("Post Job", "/jobs/create"),
        ],
        Some(Role::Candidate) => vec![
            item("Find Jobs", "/jobs"),
            item("My Applications", "/applications"),
            item("My Profile", "/profile"),
        ],
        None => Vec::new(),
    }
}

/// Account links shown for any signed-in role.
pub fn account_menu(identity: &IdentityState) -> Vec<MenuItem> {
    if !identity.is_authenticated() {
        return Vec::new();
    }

    vec![
        item("Dashboard", "/dashboard"),
        item("My Profile", "/profile"),
        item("Home", "/"),
    ]
}
