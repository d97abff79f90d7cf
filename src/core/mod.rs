pub mod engine;
pub mod generator;
pub mod loader;
pub mod template;

pub use crate::domain::model::{GenerationReport, NameList, Placeholder};
pub use crate::domain::ports::{ConfigProvider, GenerationObserver, NoopObserver};
pub use crate::utils::error::Result;
