use anyhow::Context;
use eyeguardcore::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

fn default_bind() -> String {
    "127.0.0.1:9000".to_string()
}

/// Driver configuration: the session to generate plus where the dashboard
/// bridge listens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(flatten)]
    pub session: SessionConfig,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            bind: default_bind(),
        }
    }
}

impl ConsoleConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading console config {}", path_ref.display()))?;
        let config: ConsoleConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing console config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Layers command-line values over the loaded or default settings.
    /// Flags left unset keep what the config already holds.
    pub fn apply_overrides(
        &mut self,
        cameras: Option<usize>,
        incidents: Option<usize>,
        seed: Option<u64>,
    ) {
        if let Some(cameras) = cameras {
            self.session.camera_count = cameras;
        }
        if let Some(incidents) = incidents {
            self.session.incident_count = incidents;
        }
        if seed.is_some() {
            self.session.seed = seed;
        }
    }

    pub fn to_session_config(&self) -> SessionConfig {
        self.session.clone()
    }

    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("parsing bind address {}", self.bind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn overrides_produce_session_config() {
        let mut cfg = ConsoleConfig::default();
        cfg.apply_overrides(Some(12), Some(30), Some(4));
        let session = cfg.to_session_config();
        assert_eq!(session.camera_count, 12);
        assert_eq!(session.incident_count, 30);
        assert_eq!(session.seed, Some(4));
        assert_eq!(session.alert_limit, 20);
        assert_eq!(cfg.bind_address().unwrap().port(), 9000);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"camera_count: 6\nincident_count: 9\nseed: 17\nincidents_today_fallback: 12\nuser_names:\n  - Ada Park\nbind: 0.0.0.0:8088\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ConsoleConfig::load(&path).unwrap();
        assert_eq!(cfg.session.camera_count, 6);
        assert_eq!(cfg.session.incident_count, 9);
        assert_eq!(cfg.session.seed, Some(17));
        assert_eq!(cfg.session.incidents_today_fallback, Some(12));
        assert_eq!(cfg.session.user_names, vec!["Ada Park".to_string()]);
        assert_eq!(cfg.session.alert_limit, 20);
        assert_eq!(cfg.bind_address().unwrap().port(), 8088);
    }

    #[test]
    fn flags_override_only_what_they_name() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"camera_count: 6\nincident_count: 9\nseed: 17\n")
            .unwrap();
        let path = temp.into_temp_path();

        let mut cfg = ConsoleConfig::load(&path).unwrap();
        cfg.apply_overrides(None, Some(40), Some(99));
        assert_eq!(cfg.session.camera_count, 6);
        assert_eq!(cfg.session.incident_count, 40);
        assert_eq!(cfg.session.seed, Some(99));

        let mut untouched = ConsoleConfig::load(&path).unwrap();
        untouched.apply_overrides(None, None, None);
        assert_eq!(untouched.session.seed, Some(17));
        assert_eq!(untouched.session.incident_count, 9);
    }

    #[test]
    fn config_load_reports_bad_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"camera_count: many\n").unwrap();
        let path = temp.into_temp_path();
        let err = ConsoleConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing console config"));
    }

    #[test]
    fn bad_bind_address_is_an_error() {
        let cfg = ConsoleConfig {
            bind: "localhost".into(),
            ..ConsoleConfig::default()
        };
        assert!(cfg.bind_address().is_err());
    }
}
