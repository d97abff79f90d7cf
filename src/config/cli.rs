use crate::config::settings::{CrafterSettings, SettingsOverrides};
use crate::config::toml_config::TomlConfig;
use crate::core::loader::OverlongPolicy;
use crate::utils::error::Result;
use clap::Parser;

const USAGE_EXAMPLES: &str = "\
Examples:
  usernamecrafter -F firstnames.txt -L lastnames.txt -o output.txt -f {firstname}{lastname}
  usernamecrafter -F firstnames.txt -L lastnames.txt -o output.txt -f {firstname}.{lastname}@dom.com
  usernamecrafter -F firstnames.txt -L lastnames.txt -o output.txt -f {firstname}(1){lastname}
  usernamecrafter -F firstnames.txt -L lastnames.txt -o output.txt -f {firstname}{lastname}(2)
  usernamecrafter -F firstnames.txt -L lastnames.txt -o output.txt -f {firstname}(3){lastname}(3)
  usernamecrafter -F firstnames.txt -L lastnames.txt -o output.txt -f {firstname}(3)_{lastname}(3)@domain.com
  usernamecrafter -c profile.toml -o other-output.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "usernamecrafter")]
#[command(about = "Generate username and email candidates from first and last name lists")]
#[command(disable_version_flag = true)]
#[command(after_help = USAGE_EXAMPLES)]
pub struct CliConfig {
    /// File with one first name per line
    #[arg(short = 'F', long, value_name = "FILE")]
    pub firstnames: Option<String>,

    /// File with one last name per line
    #[arg(short = 'L', long, value_name = "FILE")]
    pub lastnames: Option<String>,

    /// File to write the generated lines to
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Template using {firstname}, {lastname}, {firstname}(N) and {lastname}(N)
    #[arg(short = 'f', long, value_name = "TEMPLATE")]
    pub format: Option<String>,

    /// TOML profile with default settings; command line values take precedence
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Refuse to generate more than this many lines
    #[arg(long)]
    pub max_lines: Option<u64>,

    /// Longest name kept from an input line, in bytes
    #[arg(long)]
    pub max_name_length: Option<usize>,

    /// How to handle input lines longer than --max-name-length
    #[arg(long, value_enum)]
    pub overlong: Option<OverlongPolicy>,

    /// Strip a trailing carriage return from every name (CRLF input)
    #[arg(long)]
    pub strip_cr: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,
}

impl CliConfig {
    pub fn to_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            firstnames: self.firstnames.clone(),
            lastnames: self.lastnames.clone(),
            output: self.output.clone(),
            format: self.format.clone(),
            max_lines: self.max_lines,
            max_name_length: self.max_name_length,
            overlong: self.overlong,
            strip_carriage_return: self.strip_cr.then_some(true),
            monitoring: self.monitor.then_some(true),
        }
    }

    /// 合併命令列與設定檔，命令列優先
    pub fn resolve(&self) -> Result<CrafterSettings> {
        let overrides = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading profile from: {}", path);
                let profile = TomlConfig::from_file(path)?;
                self.to_overrides().or(profile.to_overrides())
            }
            None => self.to_overrides(),
        };

        CrafterSettings::resolve(overrides)
    }
}
