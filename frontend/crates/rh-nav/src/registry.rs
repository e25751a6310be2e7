use crate::error::{NavError, Result as NavResult};
use crate::route::Route;
use crate::route_pattern::RouteParams;
use crate::view::View;

use rh_core::AccessLevel;

use std::collections::HashSet;

/// The static route table, declared once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    routes: Vec<Route>,
}

impl ViewRegistry {
    /// Build a registry, rejecting patterns that collide.
    ///
    /// Two patterns collide when they match the same paths, regardless of
    /// literal casing or parameter names.
    pub fn with_routes(routes: Vec<Route>) -> NavResult<Self> {
        let mut seen = HashSet::new();

        for route in &routes {
            if !seen.insert(route.pattern().normalized()) {
                return Err(NavError::duplicate_route(route.pattern().as_str()));
            }
        }

        Ok(Self { routes })
    }

    /// The recruitment platform's route table.
    pub fn platform_defaults() -> NavResult<Self> {
        use AccessLevel::{Admin, Authenticated, Public};

        Self::with_routes(vec![
            Route::new("/", View::Home, Public)?,
            Route::guest_only("/login", View::Login)?,
            Route::guest_only("/register", View::Register)?,
            Route::new("/dashboard", View::Dashboard, Authenticated)?,
            Route::new("/jobs", View::JobList, Authenticated)?,
            Route::new("/jobs/:id", View::JobDetail, Authenticated)?,
            Route::new("/applications", View::ApplicationList, Authenticated)?,
            Route::new("/applications/:id", View::ApplicationDetail, Authenticated)?,
            Route::new("/profile", View::Profile, Authenticated)?,
            Route::new("/candidates/:id", View::CandidateProfile, Authenticated)?,
            Route::new("/contracts", View::ContractList, Authenticated)?,
            Route::new("/contracts/:id", View::ContractDetail, Authenticated)?,
            Route::new("/adminjobs", View::AgencyJobList, Authenticated)?,
            Route::new("/adminjobs/:id", View::AgencyJobDetail, Authenticated)?,
            Route::new(
                "/jobs/:jobId/applications",
                View::JobApplications,
                AccessLevel::Employer,
            )?,
            Route::new("/jobs/create", View::JobForm, AccessLevel::Employer)?,
            Route::new("/jobs/:id/edit", View::JobForm, AccessLevel::Employer)?,
            Route::new("/jobs/manage", View::JobManage, AccessLevel::Employer)?,
            Route::new("/admin", View::AdminPanel, Admin)?,
            Route::new("/blogs/manage", View::BlogManage, Admin)?,
            Route::new("/blogs/create", View::BlogForm, Admin)?,
            Route::new("/blogs/:id/edit", View::BlogForm, Admin)?,
            Route::new("/blogs/:id", View::BlogDetail, Admin)?,
            Route::new(
                "/adminjobs/:jobId/applications",
                View::AgencyJobApplications,
                Admin,
            )?,
            Route::new("/adminjobs/create", View::AgencyJobForm, Admin)?,
            Route::new("/adminjobs/:id/edit", View::AgencyJobForm, Admin)?,
            Route::new("/adminjobs/manage", View::AgencyJobManage, Admin)?,
            Route::new("/admin/manageusers", View::UserManage, Admin)?,
            Route::new("/admin/users/:id", View::UserDetail, Admin)?,
            Route::new(
                "/contractTemplate/manage",
                View::ContractTemplateManage,
                Admin,
            )?,
            Route::new(
                "/contractTemplate/create",
                View::ContractTemplateForm,
                Admin,
            )?,
            Route::new(
                "/contractTemplate/:id/edit",
                View::ContractTemplateForm,
                Admin,
            )?,
            Route::new(
                "/contractTemplate/:id",
                View::ContractTemplateDetail,
                Admin,
            )?,
        ])
    }

    /// Find the route for a path.
    ///
    /// When several patterns match, the one with the most literal segments
    /// wins, so `/jobs/create` resolves to the creation form rather than
    /// the `/jobs/:id` detail view. Ties fall back to declaration order.
    pub fn find(&self, path: &str) -> Option<(&Route, RouteParams)> {
        let mut best: Option<(&Route, RouteParams, usize)> = None;

        for route in &self.routes {
            if let Some(params) = route.pattern().matches(path) {
                let literals = route.pattern().literal_count();
                let better = match &best {
                    Some((_, _, best_literals)) => literals > *best_literals,
                    None => true,
                };
                if better {
                    best = Some((route, params, literals));
                }
            }
        }

        best.map(|(route, params, _)| (route, params))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
