use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clinic_core::common_ensembles;
use clinic_engine::{FetchSettings, Pacing};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.midwestclinic.org/user_files_1/pdfs/concerts";

/// Run settings. Every field is optional in the RON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub download_delay_ms: u64,
    pub discovery_delay_ms: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Names probed in discovery mode.
    pub candidates: Vec<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        let pacing = Pacing::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("programs"),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            download_delay_ms: pacing.download_delay.as_millis() as u64,
            discovery_delay_ms: pacing.discovery_delay.as_millis() as u64,
            redirect_limit: fetch.redirect_limit,
            max_bytes: fetch.max_bytes,
            candidates: common_ensembles(),
        }
    }
}

impl ScraperConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_ron(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_ron(text: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            download_delay: Duration::from_millis(self.download_delay_ms),
            discovery_delay: Duration::from_millis(self.discovery_delay_ms),
        }
    }
}
