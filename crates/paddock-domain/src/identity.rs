//! Authenticated principal issued by the external auth backend.

use uuid::Uuid;

/// Identity as reported by the auth backend. Referenced, never mutated;
/// the portal augments it with a [`crate::profile::Profile`] row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: Option<String>,
    /// `full_name` from the backend's user metadata, when present.
    pub full_name: Option<String>,
    /// `name` from the backend's user metadata, when present.
    pub name: Option<String>,
    /// Raw `role` claim from app metadata; normalized lazily.
    pub role_claim: Option<String>,
    /// Raw `dealer_id` claim from app metadata; normalized lazily.
    pub dealer_claim: Option<String>,
}

impl Identity {
    /// Bare identity with only an id, as used when claims are absent.
    pub fn anonymous_claims(id: Uuid) -> Self {
        Self {
            id,
            email: None,
            full_name: None,
            name: None,
            role_claim: None,
            dealer_claim: None,
        }
    }

    /// Local part of the email address, if any.
    pub fn email_local_part(&self) -> Option<&str> {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|part| !part.is_empty())
    }
}
