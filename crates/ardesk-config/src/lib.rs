use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ardesk_core::rules::{validate_soon_days, DEFAULT_SOON_DAYS};
use ardesk_core::time::parse_date;
use ardesk_core::view::ViewKind;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "ardesk";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub due_soon_days: i64,
    pub as_of: AsOfSetting,
    pub default_view: ViewKind,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            due_soon_days: DEFAULT_SOON_DAYS,
            as_of: AsOfSetting::Sample,
            default_view: ViewKind::Dashboard,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Which date the aging and status rules treat as "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsOfSetting {
    /// The date the sample data was captured on.
    Sample,
    Today,
    Date(NaiveDate),
}

impl AsOfSetting {
    /// Resolves the setting, falling back to `today` when there is no
    /// sample reference date.
    pub fn resolve(self, reference: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
        match self {
            AsOfSetting::Sample => reference.unwrap_or(today),
            AsOfSetting::Today => today,
            AsOfSetting::Date(date) => date,
        }
    }
}

/// Picks the effective as-of date: an explicit override (from a command-line
/// flag) wins over the configured setting.
pub fn resolve_as_of(
    override_raw: Option<&str>,
    config: &AppConfig,
    reference: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let setting = match override_raw {
        Some(raw) => raw.parse::<AsOfSetting>()?,
        None => config.as_of,
    };
    Ok(setting.resolve(reference, today))
}

impl FromStr for AsOfSetting {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "sample" => Ok(AsOfSetting::Sample),
            "today" => Ok(AsOfSetting::Today),
            _ => parse_date(trimmed)
                .map(AsOfSetting::Date)
                .map_err(|_| ConfigError::InvalidAsOf(value.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid due_soon_days value: {0}")]
    InvalidSoonDays(i64),
    #[error("invalid as_of value: {0} (expected sample, today or YYYY-MM-DD)")]
    InvalidAsOf(String),
    #[error("invalid currency_symbol value: {0:?}")]
    InvalidCurrencySymbol(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    due_soon_days: Option<i64>,
    as_of: Option<String>,
    default_view: Option<ViewKind>,
    currency_symbol: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(soon_days) = parsed.due_soon_days {
        let soon_days =
            validate_soon_days(soon_days).map_err(|_| ConfigError::InvalidSoonDays(soon_days))?;
        config.due_soon_days = soon_days;
    }

    if let Some(as_of) = parsed.as_of {
        config.as_of = as_of.parse()?;
    }

    if let Some(view) = parsed.default_view {
        config.default_view = view;
    }

    if let Some(symbol) = parsed.currency_symbol {
        let trimmed = symbol.trim();
        if trimmed.is_empty() || trimmed.chars().count() > 3 {
            return Err(ConfigError::InvalidCurrencySymbol(symbol));
        }
        config.currency_symbol = trimmed.to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, resolve_as_of, AppConfig, AsOfSetting, ConfigError, ConfigFile,
    };
    use ardesk_core::view::ViewKind;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            due_soon_days: Some(3),
            as_of: Some("2025-01-31".to_string()),
            default_view: Some(ViewKind::Reminders),
            currency_symbol: Some("€".to_string()),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.due_soon_days, 3);
        assert_eq!(merged.as_of, AsOfSetting::Date(date("2025-01-31")));
        assert_eq!(merged.default_view, ViewKind::Reminders);
        assert_eq!(merged.currency_symbol, "€");
    }

    #[test]
    fn merge_config_defaults_when_empty() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged, AppConfig::default());
    }

    #[test]
    fn merge_config_rejects_out_of_range_soon_days() {
        let parsed = ConfigFile {
            due_soon_days: Some(400),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSoonDays(400)));
    }

    #[test]
    fn as_of_setting_parses_keywords_and_dates() {
        assert_eq!("sample".parse::<AsOfSetting>().unwrap(), AsOfSetting::Sample);
        assert_eq!(" Today ".parse::<AsOfSetting>().unwrap(), AsOfSetting::Today);
        assert_eq!(
            "2024-12-22".parse::<AsOfSetting>().unwrap(),
            AsOfSetting::Date(date("2024-12-22"))
        );
        assert!("yesterday".parse::<AsOfSetting>().is_err());
    }

    #[test]
    fn as_of_setting_resolves() {
        let reference = date("2024-12-22");
        let today = date("2026-03-01");
        assert_eq!(AsOfSetting::Sample.resolve(Some(reference), today), reference);
        assert_eq!(AsOfSetting::Sample.resolve(None, today), today);
        assert_eq!(AsOfSetting::Today.resolve(Some(reference), today), today);
        assert_eq!(
            AsOfSetting::Date(date("2025-01-01")).resolve(Some(reference), today),
            date("2025-01-01")
        );
    }

    #[test]
    fn override_wins_over_configured_as_of() {
        let reference = Some(date("2024-12-22"));
        let today = date("2026-03-01");
        let config = AppConfig {
            as_of: AsOfSetting::Today,
            ..AppConfig::default()
        };
        assert_eq!(resolve_as_of(None, &config, reference, today).unwrap(), today);
        assert_eq!(
            resolve_as_of(Some("2025-02-01"), &config, reference, today).unwrap(),
            date("2025-02-01")
        );
        assert_eq!(
            resolve_as_of(Some("sample"), &config, reference, today).unwrap(),
            date("2024-12-22")
        );
        let err = resolve_as_of(Some("soon"), &config, reference, today).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAsOf(ref raw) if raw == "soon"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "due_soon_days = 5\nas_of = \"today\"\ndefault_view = \"invoices\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.due_soon_days, 5);
        assert_eq!(config.as_of, AsOfSetting::Today);
        assert_eq!(config.default_view, ViewKind::Invoices);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
