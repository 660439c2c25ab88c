//! Page access rules.
//!
//! Signed-out visitors are sent from protected pages to the login page with
//! a `callbackUrl` pointing back, and signed-in users are sent from the login
//! page to the dashboard. The rules are pure; the HTTP middleware supplies the
//! path and whether a session exists.

/// Where signed-out visitors are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where signed-in users land by default.
pub const LANDING_PATH: &str = "/dashboard";
/// Query parameter carrying the page to return to after login.
pub const CALLBACK_PARAM: &str = "callbackUrl";

const PROTECTED_PREFIXES: [&str; 3] = ["/dashboard", "/students", "/courses"];

/// Access class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Requires a session.
    Protected,
    /// Only meaningful without a session.
    AuthOnly,
    /// Open to everyone.
    Public,
}

/// What the guard does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through unchanged.
    Pass,
    /// Redirect to the contained location.
    Redirect(String),
}

/// Classify `path` by prefix.
///
/// # Examples
/// ```
/// use student_portal::domain::route_guard::{classify, PathClass};
///
/// assert_eq!(classify("/students/abc/edit"), PathClass::Protected);
/// assert_eq!(classify("/login"), PathClass::AuthOnly);
/// assert_eq!(classify("/"), PathClass::Public);
/// ```
pub fn classify(path: &str) -> PathClass {
    if PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        PathClass::Protected
    } else if path.starts_with(LOGIN_PATH) {
        PathClass::AuthOnly
    } else {
        PathClass::Public
    }
}

/// Decide how to handle a request for `path`.
///
/// # Examples
/// ```
/// use student_portal::domain::route_guard::{decide, GuardDecision};
///
/// assert_eq!(
///     decide("/students", false),
///     GuardDecision::Redirect("/login?callbackUrl=/students".into())
/// );
/// assert_eq!(decide("/login", true), GuardDecision::Redirect("/dashboard".into()));
/// assert_eq!(decide("/students", true), GuardDecision::Pass);
/// ```
pub fn decide(path: &str, has_session: bool) -> GuardDecision {
    match (classify(path), has_session) {
        (PathClass::Protected, false) => GuardDecision::Redirect(login_redirect(path)),
        (PathClass::AuthOnly, true) => GuardDecision::Redirect(LANDING_PATH.to_owned()),
        _ => GuardDecision::Pass,
    }
}

fn login_redirect(path: &str) -> String {
    format!("{LOGIN_PATH}?{CALLBACK_PARAM}={}", encode_callback(path))
}

// Paths arrive already percent-encoded; only characters that would end or
// split the query value need escaping.
fn encode_callback(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '&' => out.push_str("%26"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            '=' => out.push_str("%3D"),
            ' ' => out.push_str("%20"),
            other => out.push(other),
        }
    }
    out
}
