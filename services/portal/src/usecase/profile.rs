use anyhow::anyhow;

use paddock_domain::identity::Identity;
use paddock_domain::profile::Profile;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::ProfileWriteError;
use crate::error::PortalError;

/// Lazily create the profile for an identity, at most once.
///
/// Persistence walks an ordered ladder so a first login is never blocked by
/// a missing privileged-credential path:
/// 1. privileged upsert (skipped when no elevated tier is configured),
/// 2. normal-privilege insert of the full payload,
/// 3. on a permission rejection, insert of the reduced payload,
/// with duplicate-key treated as success at every insert step (the race
/// loser re-reads the winner's row) and an absent profiles table tolerated.
/// `Ok(None)` means even the final re-read found nothing; the gate turns
/// that into a `profile-missing` redirect.
pub struct EnsureProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> EnsureProfileUseCase<R> {
    pub async fn execute(&self, identity: &Identity) -> Result<Option<Profile>, PortalError> {
        if let Some(existing) = self.repo.find_by_id(identity.id).await? {
            return Ok(Some(existing));
        }

        let profile = Profile::default_for(identity);
        self.persist(&profile).await?;
        self.repo.find_by_id(identity.id).await
    }

    async fn persist(&self, profile: &Profile) -> Result<(), PortalError> {
        match self.repo.upsert_privileged(profile).await {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(err) => {
                tracing::debug!(error = %err, "privileged profile upsert failed; falling back");
            }
        }

        match self.repo.insert(profile).await {
            Ok(())
            | Err(ProfileWriteError::Duplicate)
            | Err(ProfileWriteError::TableMissing) => Ok(()),
            Err(ProfileWriteError::PermissionDenied) => {
                // Write policy refused the claimed role/dealer; retry with
                // the least-privileged payload.
                match self.repo.insert(&profile.reduced()).await {
                    Ok(())
                    | Err(ProfileWriteError::Duplicate)
                    | Err(ProfileWriteError::TableMissing) => Ok(()),
                    Err(ProfileWriteError::PermissionDenied) => Err(PortalError::Internal(
                        anyhow!("write policy rejected even the reduced profile payload"),
                    )),
                    Err(ProfileWriteError::Other(err)) => Err(PortalError::Internal(err)),
                }
            }
            Err(ProfileWriteError::Other(err)) => Err(PortalError::Internal(err)),
        }
    }
}
