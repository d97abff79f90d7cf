pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{CrafterSettings, TomlConfig};
pub use crate::core::{
    engine::CrafterEngine,
    generator::{GenerateOptions, Generator},
    loader::{LoaderOptions, NameListLoader, OverlongPolicy},
    template::Template,
};
pub use domain::model::{GenerationReport, NameList, Placeholder};
pub use utils::error::{CrafterError, Result};
