//! Report settings that survive restarts: signatory names and an optional
//! default export directory. Ledger state itself is session-only and is never
//! written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::utils::{app_data_dir, ensure_dir};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub chair_name: String,
    #[serde(default)]
    pub treasurer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_base(app_data_dir())
    }

    pub fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored config, falling back to defaults when none exists.
    pub fn load(&self) -> Result<ReportConfig, LedgerError> {
        if !self.path.exists() {
            return Ok(ReportConfig::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), LedgerError> {
        let raw = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_disk() {
        let dir = std::env::temp_dir().join(format!("kas_masjid_cfg_{}", std::process::id()));
        let manager = ConfigManager::from_base(dir.clone()).unwrap();
        let config = ReportConfig {
            chair_name: "H. Ahmad".into(),
            treasurer_name: "Siti".into(),
            export_dir: None,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join(format!("kas_masjid_cfg_none_{}", std::process::id()));
        let manager = ConfigManager::from_base(dir.clone()).unwrap();
        assert_eq!(manager.load().unwrap(), ReportConfig::default());
        fs::remove_dir_all(dir).ok();
    }
}
