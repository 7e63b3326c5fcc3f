//! Session cookie builders.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie carrying the short-lived access token.
pub const PORTAL_ACCESS_TOKEN: &str = "portal_access_token";

/// Cookie carrying the refresh token used for sliding renewal.
pub const PORTAL_REFRESH_TOKEN: &str = "portal_refresh_token";

/// Cookie Max-Age for both tokens in seconds (7 days).
pub const SESSION_COOKIE_MAX_AGE: i64 = 604_800;

fn session_cookie(name: &'static str, value: String, domain: Option<&str>, max_age: Duration) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);
    if let Some(domain) = domain {
        builder = builder.domain(domain.to_owned());
    }
    builder.build()
}

/// Set both session cookies, e.g. after sign-in or a sliding renewal.
pub fn set_session_cookies(
    jar: CookieJar,
    access_token: &str,
    refresh_token: &str,
    domain: Option<&str>,
) -> CookieJar {
    let max_age = Duration::seconds(SESSION_COOKIE_MAX_AGE);
    jar.add(session_cookie(
        PORTAL_ACCESS_TOKEN,
        access_token.to_owned(),
        domain,
        max_age,
    ))
    .add(session_cookie(
        PORTAL_REFRESH_TOKEN,
        refresh_token.to_owned(),
        domain,
        max_age,
    ))
}

/// Expire both session cookies by setting Max-Age to zero.
pub fn clear_session_cookies(jar: CookieJar, domain: Option<&str>) -> CookieJar {
    jar.add(session_cookie(
        PORTAL_ACCESS_TOKEN,
        String::new(),
        domain,
        Duration::ZERO,
    ))
    .add(session_cookie(
        PORTAL_REFRESH_TOKEN,
        String::new(),
        domain,
        Duration::ZERO,
    ))
}
