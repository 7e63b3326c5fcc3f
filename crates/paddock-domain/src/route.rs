//! Route-access rules and the per-request access decision.

use crate::identity::Identity;
use crate::profile::Profile;
use crate::redirect::{
    DEFAULT_LANDING, RedirectReason, landing_redirect_url, login_redirect_url,
};
use crate::role::AppRole;

/// Static mapping of a route prefix to the roles allowed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteAccessRule {
    pub base_path: &'static str,
    pub roles: &'static [AppRole],
    /// When set, non-`SUPER_ADMIN` roles must carry a dealer assignment.
    pub require_dealer: bool,
}

pub const PORTAL_MEMBER_ROLES: &[AppRole] = &[
    AppRole::SuperAdmin,
    AppRole::DealerManager,
    AppRole::DealerStaff,
];

/// Guarded prefixes, fixed at process start.
pub const ROUTE_ACCESS_RULES: &[RouteAccessRule] = &[
    RouteAccessRule {
        base_path: "/dashboard",
        roles: PORTAL_MEMBER_ROLES,
        require_dealer: true,
    },
    RouteAccessRule {
        base_path: "/vehicles",
        roles: PORTAL_MEMBER_ROLES,
        require_dealer: true,
    },
    RouteAccessRule {
        base_path: "/admin/dealers",
        roles: &[AppRole::SuperAdmin],
        require_dealer: false,
    },
];

/// Paths that bounce already-authenticated users back to the landing page.
pub const AUTH_ENTRY_PATHS: &[&str] = &["/login"];

fn path_matches(path: &str, base_path: &str) -> bool {
    path == base_path
        || (path.starts_with(base_path) && path.as_bytes().get(base_path.len()) == Some(&b'/'))
}

/// Find the rule guarding `path`. Overlapping prefixes resolve by
/// longest base path, so rule declaration order never matters.
pub fn match_rule(path: &str) -> Option<&'static RouteAccessRule> {
    ROUTE_ACCESS_RULES
        .iter()
        .filter(|rule| path_matches(path, rule.base_path))
        .max_by_key(|rule| rule.base_path.len())
}

pub fn is_auth_entry_path(path: &str) -> bool {
    AUTH_ENTRY_PATHS
        .iter()
        .any(|base| path_matches(path, base))
}

/// Outcome of one gate evaluation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectToLogin {
        next: String,
        reason: Option<RedirectReason>,
    },
    RedirectToForbidden {
        reason: RedirectReason,
    },
    /// Auth-entry path visited while already signed in.
    RedirectToLanding,
}

impl AccessDecision {
    /// Redirect target, or `None` for [`AccessDecision::Allow`].
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { next, reason } => Some(login_redirect_url(next, *reason)),
            Self::RedirectToForbidden { reason } => Some(landing_redirect_url(Some(*reason))),
            Self::RedirectToLanding => Some(DEFAULT_LANDING.to_owned()),
        }
    }
}

/// Decide access for one request.
///
/// `profile` is the outcome of the profile-bootstrap step and is only
/// consulted when a rule matched and an identity is present; `None` there
/// means bootstrap could not produce a row.
pub fn evaluate_access(
    path: &str,
    query: Option<&str>,
    identity: Option<&Identity>,
    profile: Option<&Profile>,
) -> AccessDecision {
    if let Some(rule) = match_rule(path) {
        let next = match query {
            Some(query) => format!("{path}?{query}"),
            None => path.to_owned(),
        };
        let Some(_identity) = identity else {
            return AccessDecision::RedirectToLogin { next, reason: None };
        };
        let Some(profile) = profile else {
            return AccessDecision::RedirectToLogin {
                next,
                reason: Some(RedirectReason::ProfileMissing),
            };
        };
        if !rule.roles.contains(&profile.role) {
            return AccessDecision::RedirectToForbidden {
                reason: RedirectReason::Forbidden,
            };
        }
        if rule.require_dealer
            && profile.role != AppRole::SuperAdmin
            && profile.dealer_id.is_none()
        {
            return AccessDecision::RedirectToForbidden {
                reason: RedirectReason::DealerRequired,
            };
        }
    }

    if is_auth_entry_path(path) && identity.is_some() {
        return AccessDecision::RedirectToLanding;
    }

    AccessDecision::Allow
}
