use crate::core::loader::{LoaderOptions, OverlongPolicy, DEFAULT_MAX_NAME_LENGTH};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_required_field, Validate,
};

pub const MAX_NAME_LENGTH_LIMIT: usize = 65_536;

/// Optional settings from one source (command line or profile).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub firstnames: Option<String>,
    pub lastnames: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub max_lines: Option<u64>,
    pub max_name_length: Option<usize>,
    pub overlong: Option<OverlongPolicy>,
    pub strip_carriage_return: Option<bool>,
    pub monitoring: Option<bool>,
}

impl SettingsOverrides {
    /// Fills every unset value from `fallback`.
    pub fn or(self, fallback: SettingsOverrides) -> SettingsOverrides {
        SettingsOverrides {
            firstnames: self.firstnames.or(fallback.firstnames),
            lastnames: self.lastnames.or(fallback.lastnames),
            output: self.output.or(fallback.output),
            format: self.format.or(fallback.format),
            max_lines: self.max_lines.or(fallback.max_lines),
            max_name_length: self.max_name_length.or(fallback.max_name_length),
            overlong: self.overlong.or(fallback.overlong),
            strip_carriage_return: self.strip_carriage_return.or(fallback.strip_carriage_return),
            monitoring: self.monitoring.or(fallback.monitoring),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrafterSettings {
    pub firstnames_path: String,
    pub lastnames_path: String,
    pub output_path: String,
    pub format: String,
    pub max_lines: Option<u64>,
    pub loader: LoaderOptions,
    pub monitoring: bool,
}

impl CrafterSettings {
    pub fn resolve(overrides: SettingsOverrides) -> Result<Self> {
        let settings = Self {
            firstnames_path: validate_required_field("firstnames", &overrides.firstnames)?.clone(),
            lastnames_path: validate_required_field("lastnames", &overrides.lastnames)?.clone(),
            output_path: validate_required_field("output", &overrides.output)?.clone(),
            format: validate_required_field("format", &overrides.format)?.clone(),
            max_lines: overrides.max_lines,
            loader: LoaderOptions {
                max_name_length: overrides.max_name_length.unwrap_or(DEFAULT_MAX_NAME_LENGTH),
                overlong: overrides.overlong.unwrap_or_default(),
                strip_carriage_return: overrides.strip_carriage_return.unwrap_or(false),
            },
            monitoring: overrides.monitoring.unwrap_or(false),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CrafterSettings {
    fn validate(&self) -> Result<()> {
        validate_path("firstnames", &self.firstnames_path)?;
        validate_path("lastnames", &self.lastnames_path)?;
        validate_path("output", &self.output_path)?;

        if let Some(max_lines) = self.max_lines {
            validate_positive_number("max_lines", max_lines, 1)?;
        }

        validate_range(
            "max_name_length",
            self.loader.max_name_length,
            1,
            MAX_NAME_LENGTH_LIMIT,
        )?;

        Ok(())
    }
}

impl ConfigProvider for CrafterSettings {
    fn firstnames_path(&self) -> &str {
        &self.firstnames_path
    }

    fn lastnames_path(&self) -> &str {
        &self.lastnames_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn loader_options(&self) -> LoaderOptions {
        self.loader
    }

    fn max_lines(&self) -> Option<u64> {
        self.max_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CrafterError;

    fn complete() -> SettingsOverrides {
        SettingsOverrides {
            firstnames: Some("first.txt".to_string()),
            lastnames: Some("last.txt".to_string()),
            output: Some("out.txt".to_string()),
            format: Some("{firstname}.{lastname}".to_string()),
            ..SettingsOverrides::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = CrafterSettings::resolve(complete()).unwrap();
        assert_eq!(settings.loader, LoaderOptions::default());
        assert_eq!(settings.max_lines, None);
        assert!(!settings.monitoring);
    }

    #[test]
    fn test_missing_format_is_reported() {
        let overrides = SettingsOverrides {
            format: None,
            ..complete()
        };
        match CrafterSettings::resolve(overrides) {
            Err(CrafterError::MissingConfigError { field }) => assert_eq!(field, "format"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_format_is_allowed() {
        let overrides = SettingsOverrides {
            format: Some(String::new()),
            ..complete()
        };
        assert!(CrafterSettings::resolve(overrides).is_ok());
    }

    #[test]
    fn test_zero_max_lines_is_invalid() {
        let overrides = SettingsOverrides {
            max_lines: Some(0),
            ..complete()
        };
        assert!(CrafterSettings::resolve(overrides).is_err());
    }

    #[test]
    fn test_max_name_length_range() {
        let overrides = SettingsOverrides {
            max_name_length: Some(0),
            ..complete()
        };
        assert!(CrafterSettings::resolve(overrides).is_err());
    }

    #[test]
    fn test_first_source_wins() {
        let cli = SettingsOverrides {
            output: Some("cli.txt".to_string()),
            overlong: Some(OverlongPolicy::Reject),
            ..SettingsOverrides::default()
        };
        let profile = SettingsOverrides {
            output: Some("profile.txt".to_string()),
            strip_carriage_return: Some(true),
            ..complete()
        };

        let settings = CrafterSettings::resolve(cli.or(profile)).unwrap();
        assert_eq!(settings.output_path, "cli.txt");
        assert_eq!(settings.firstnames_path, "first.txt");
        assert_eq!(settings.loader.overlong, OverlongPolicy::Reject);
        assert!(settings.loader.strip_carriage_return);
    }
}
