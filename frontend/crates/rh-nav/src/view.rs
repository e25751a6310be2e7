/// Every screen the platform can render.
///
/// Form views serve both creation and editing; an `id` captured from the
/// path tells the host which mode it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    // Public
    Home,
    Login,
    Register,

    // Role-conditional landing. The composer never renders this variant
    // directly; it dispatches to one of the three dashboards below.
    Dashboard,
    AdminDashboard,
    EmployerDashboard,
    CandidateDashboard,

    // Signed-in
    JobList,
    JobDetail,
    ApplicationList,
    ApplicationDetail,
    Profile,
    CandidateProfile,
    ContractList,
    ContractDetail,
    AgencyJobList,
    AgencyJobDetail,

    // Employer
    JobApplications,
    JobForm,
    JobManage,

    // Admin
    AdminPanel,
    BlogManage,
    BlogForm,
    BlogDetail,
    AgencyJobApplications,
    AgencyJobForm,
    AgencyJobManage,
    UserManage,
    UserDetail,
    ContractTemplateManage,
    ContractTemplateForm,
    ContractTemplateDetail,
}
