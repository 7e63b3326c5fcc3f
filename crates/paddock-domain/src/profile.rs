//! Portal profile: the portal's own record augmenting an identity.

use uuid::Uuid;

use crate::identity::Identity;
use crate::role::{AppRole, normalize_role};

/// Display-name fallback when neither metadata nor email yield one.
const FALLBACK_DISPLAY_NAME: &str = "Dealer User";

/// One row per identity; `id` equals the identity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub dealer_id: Option<Uuid>,
    pub role: AppRole,
    pub display_name: Option<String>,
}

impl Profile {
    /// Default profile persisted on an identity's first login: role and
    /// dealer are taken from the identity's claims after normalization.
    pub fn default_for(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            dealer_id: normalize_dealer_id(identity.dealer_claim.as_deref()),
            role: normalize_role(identity.role_claim.as_deref()),
            display_name: Some(derive_display_name(identity)),
        }
    }

    /// Copy with dealer assignment dropped and role forced to the least
    /// privileged, used when write policy rejects the full payload.
    pub fn reduced(&self) -> Self {
        Self {
            id: self.id,
            dealer_id: None,
            role: AppRole::DealerStaff,
            display_name: self.display_name.clone(),
        }
    }
}

/// A dealer claim must be a well-formed UUID or it is treated as absent.
pub fn normalize_dealer_id(value: Option<&str>) -> Option<Uuid> {
    value.map(str::trim).and_then(|v| Uuid::parse_str(v).ok())
}

/// Display name: metadata `full_name`, then `name`, then the email
/// local-part, then a fixed label.
pub fn derive_display_name(identity: &Identity) -> String {
    let from_metadata = identity
        .full_name
        .as_deref()
        .or(identity.name.as_deref())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(name) = from_metadata {
        return name.to_owned();
    }
    identity
        .email_local_part()
        .unwrap_or(FALLBACK_DISPLAY_NAME)
        .to_owned()
}
