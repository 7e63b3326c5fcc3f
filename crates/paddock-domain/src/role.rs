//! Portal roles.

use serde::{Deserialize, Serialize};

/// Role assigned to a portal profile.
///
/// Stored as its `SCREAMING_SNAKE_CASE` name in the profiles table.
/// Unrecognized stored values normalize to the least-privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppRole {
    SuperAdmin,
    DealerManager,
    DealerStaff,
}

impl AppRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::DealerManager => "DEALER_MANAGER",
            Self::DealerStaff => "DEALER_STAFF",
        }
    }

    /// Parse an exact role name. Returns `None` for anything else;
    /// callers wanting the lenient form use [`normalize_role`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SUPER_ADMIN" => Some(Self::SuperAdmin),
            "DEALER_MANAGER" => Some(Self::DealerManager),
            "DEALER_STAFF" => Some(Self::DealerStaff),
            _ => None,
        }
    }

    /// Privilege rank, higher means more privileged.
    pub fn privilege(self) -> u8 {
        match self {
            Self::DealerStaff => 0,
            Self::DealerManager => 1,
            Self::SuperAdmin => 2,
        }
    }
}

/// Normalize an untrusted role claim: trim, uppercase, fall back to
/// `DEALER_STAFF` when absent or unrecognized.
pub fn normalize_role(value: Option<&str>) -> AppRole {
    value
        .map(|v| v.trim().to_uppercase())
        .and_then(|v| AppRole::parse(&v))
        .unwrap_or(AppRole::DealerStaff)
}

impl PartialOrd for AppRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AppRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.privilege().cmp(&other.privilege())
    }
}
