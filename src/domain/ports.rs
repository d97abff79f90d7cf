use crate::core::loader::LoaderOptions;
use crate::domain::model::{GenerationReport, NameField, NameList};

pub trait ConfigProvider {
    fn firstnames_path(&self) -> &str;
    fn lastnames_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn format(&self) -> &str;
    fn loader_options(&self) -> LoaderOptions;
    fn max_lines(&self) -> Option<u64>;
}

/// Receives progress signals from a generation run.
///
/// Every hook has an empty default so implementors only override what they report.
pub trait GenerationObserver {
    fn names_loaded(&self, _field: NameField, _names: &NameList) {}

    fn generation_started(&self, _firstnames: usize, _lastnames: usize) {}

    fn generation_finished(&self, _report: &GenerationReport) {}
}

/// Observer that ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
