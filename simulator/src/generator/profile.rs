use anyhow::{bail, ensure};
use chrono::Utc;
use eyeguardcore::{SessionConfig, Store};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Largest roster that keeps three-digit `cam-NNN` and `user-NNN` ids.
pub const MAX_CAMERAS: usize = 999;
pub const MAX_USERS: usize = 999;
/// Largest log that keeps seven-digit `INC-` ids.
pub const MAX_INCIDENTS: usize = 9_999;

fn validate(config: &SessionConfig) -> anyhow::Result<()> {
    ensure!(
        config.camera_count <= MAX_CAMERAS,
        "camera count {} exceeds {}",
        config.camera_count,
        MAX_CAMERAS
    );
    ensure!(
        config.incident_count <= MAX_INCIDENTS,
        "incident count {} exceeds {}",
        config.incident_count,
        MAX_INCIDENTS
    );
    ensure!(
        config.user_names.len() <= MAX_USERS,
        "{} user names exceed {}",
        config.user_names.len(),
        MAX_USERS
    );
    let domain = config.email_domain.trim();
    ensure!(
        !domain.is_empty() && !domain.contains('@') && !domain.contains(' '),
        "email domain {:?} is not a bare domain",
        config.email_domain
    );
    if let Some(position) = config
        .user_names
        .iter()
        .position(|name| name.trim().is_empty())
    {
        bail!("user name #{} is blank", position + 1);
    }
    Ok(())
}

/// Generates a session store. An unseeded config draws a fresh seed, which is
/// logged and kept on the store's config so the session can be replayed.
pub fn build_store_from_config(config: &SessionConfig) -> anyhow::Result<Store> {
    validate(config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let resolved = SessionConfig {
        seed: Some(seed),
        ..config.clone()
    };
    info!(
        "generating session: seed {}, {} cameras, {} incidents",
        seed, resolved.camera_count, resolved.incident_count
    );

    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Store::generate(&resolved, &mut rng, Utc::now()))
}
