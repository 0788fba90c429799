use ui::Destination;

use crate::Route;

mod shell;
pub use shell::Shell;

mod directory;
pub use directory::Directory;

mod celebrity_detail;
pub use celebrity_detail::CelebrityDetail;

mod celebrity_signup;
pub use celebrity_signup::CelebritySignup;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod fan_dashboard;
pub use fan_dashboard::FanDashboard;

pub(crate) fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::Home => Route::Directory {},
        Destination::Login => Route::Login {},
        Destination::Register => Route::Register {},
        Destination::Dashboard => Route::FanDashboard {},
    }
}
