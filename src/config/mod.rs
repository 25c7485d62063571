use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    currency::{CurrencyCode, LocaleConfig},
    domain::period::default_inception,
    errors::LedgerError,
    utils::{app_data_dir, config_file_in, write_atomic},
};

const DEFAULT_DISPATCH_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SmsConfig {
    /// Pause between consecutive sends in a bulk run.
    pub dispatch_delay_ms: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            dispatch_delay_ms: DEFAULT_DISPATCH_DELAY_MS,
        }
    }
}

impl SmsConfig {
    pub fn dispatch_delay(&self) -> Duration {
        Duration::from_millis(self.dispatch_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub institute_name: String,
    pub locale: LocaleConfig,
    pub currency: CurrencyCode,
    /// First day of the cumulative history used by the trial balance and balance sheet.
    pub inception_date: NaiveDate,
    pub sms: SmsConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            institute_name: "Institute of Medical Sciences".into(),
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
            inception_date: default_inception(),
            sms: SmsConfig::default(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the managed location; the directory is only created on save.
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: config_file_in(&base),
        }
    }

    /// Uses an explicit file instead of the managed location.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<ReportConfig, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(ReportConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.sms.dispatch_delay(), Duration::from_millis(300));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let mut config = ReportConfig::default();
        config.institute_name = "Ghazali Institute".into();
        config.sms.dispatch_delay_ms = 0;
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn loading_leaves_missing_directory_alone() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("fresh");
        let manager = ConfigManager::with_base_dir(base.clone());
        assert_eq!(manager.load().unwrap(), ReportConfig::default());
        assert!(!base.exists());

        manager.save(&ReportConfig::default()).unwrap();
        assert!(manager.path().exists());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        fs::write(&path, r#"{"inception_date":"2015-07-01"}"#).unwrap();
        let config = ConfigManager::at_path(&path).load().unwrap();
        assert_eq!(config.inception_date, NaiveDate::from_ymd_opt(2015, 7, 1).unwrap());
        assert_eq!(config.currency, CurrencyCode::default());
    }

    #[test]
    fn malformed_file_reports_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = ConfigManager::at_path(&path).load().expect_err("broken config");
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
