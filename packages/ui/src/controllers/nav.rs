//! Navigation shell links.

pub const HOME: &str = "/";
pub const SIGNUP: &str = "/celebrity-signup";
pub const DASHBOARD: &str = "/fan-dashboard";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Links for the current auth state, in display order. Logout is rendered
/// separately as a button.
pub fn nav_links(authenticated: bool) -> Vec<NavLink> {
    let mut links = vec![
        NavLink {
            label: "Home",
            href: HOME,
        },
        NavLink {
            label: "Add Celebrity",
            href: SIGNUP,
        },
    ];
    if authenticated {
        links.push(NavLink {
            label: "Dashboard",
            href: DASHBOARD,
        });
    } else {
        links.push(NavLink {
            label: "Login",
            href: LOGIN,
        });
        links.push(NavLink {
            label: "Register",
            href: REGISTER,
        });
    }
    links
}

/// Exact path match, ignoring a trailing slash.
pub fn is_active(current: &str, href: &str) -> bool {
    let trim = |p: &str| {
        let p = p.split(['?', '#']).next().unwrap_or(p);
        match p.trim_end_matches('/') {
            "" => "/".to_string(),
            rest => rest.to_string(),
        }
    };
    trim(current) == trim(href)
}
