#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;

use std::path;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use tokio::fs;

use crate::domain::models::Profile;

const EMBEDDED_PROFILE: &str = include_str!("../../../assets/profile.yaml");

pub struct Profiles {}

impl Profiles {
    pub fn parse(payload: &str) -> Result<Profile> {
        let profile: Profile = serde_yaml::from_str(payload)?;
        if profile.name.trim().is_empty() {
            bail!("Profile is missing a name");
        }
        if profile.socials.email.trim().is_empty() {
            bail!("Profile is missing a contact email");
        }

        return Ok(profile);
    }

    pub fn embedded() -> Result<Profile> {
        return Profiles::parse(EMBEDDED_PROFILE);
    }

    /// Loads the profile once for the lifetime of the process. An empty path
    /// selects the profile bundled with the binary.
    pub async fn load(profile_file: &str) -> Result<Arc<Profile>> {
        if profile_file.is_empty() {
            return Ok(Arc::new(Profiles::embedded()?));
        }

        let profile_path = path::PathBuf::from(profile_file);
        if !profile_path.exists() {
            bail!(format!("Profile file {profile_file} does not exist"));
        }

        let payload = fs::read_to_string(&profile_path).await?;
        let profile = Profiles::parse(&payload)
            .with_context(|| return format!("Failed to parse profile file {profile_file}"))?;

        tracing::debug!(
            profile_file = profile_file,
            name = %profile.name,
            "profile loaded"
        );

        return Ok(Arc::new(profile));
    }
}
