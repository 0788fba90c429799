mod directory;
pub use directory::DirectoryView;

mod celebrity_detail;
pub use celebrity_detail::CelebrityDetailView;

mod signup;
pub use signup::SignupView;

mod credentials;
pub use credentials::{LoginView, RegisterView};

mod dashboard;
pub use dashboard::DashboardView;
