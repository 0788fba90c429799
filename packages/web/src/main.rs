use dioxus::prelude::*;

use ui::{load_config, AuthProvider, ServicesProvider};
use views::{
    CelebrityDetail, CelebritySignup, Directory, FanDashboard, Login, Register, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Directory {},
        #[route("/celebrity/:id")]
        CelebrityDetail { id: i64 },
        #[route("/celebrity-signup")]
        CelebritySignup {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/fan-dashboard")]
        FanDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider {
            config: config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
