use crate::config::settings::SettingsOverrides;
use crate::core::loader::OverlongPolicy;
use crate::utils::error::{CrafterError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub firstnames: Option<String>,
    pub lastnames: Option<String>,
    pub max_name_length: Option<usize>,
    pub overlong: Option<OverlongPolicy>,
    pub strip_carriage_return: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
    pub max_lines: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CrafterError::FileAccess {
            role: "config".to_string(),
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CrafterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CORP_DOMAIN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CrafterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> Option<bool> {
        self.monitoring.as_ref().map(|m| m.enabled)
    }

    pub fn to_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            firstnames: self.input.firstnames.clone(),
            lastnames: self.input.lastnames.clone(),
            output: self.output.path.clone(),
            format: self.output.format.clone(),
            max_lines: self.output.max_lines,
            max_name_length: self.input.max_name_length,
            overlong: self.input.overlong,
            strip_carriage_return: self.input.strip_carriage_return,
            monitoring: self.monitoring_enabled(),
        }
    }
}
