use crate::adapters::{LocalFiles, TracingObserver};
use crate::core::generator::{GenerateOptions, Generator};
use crate::core::loader::NameListLoader;
use crate::core::template::Template;
use crate::domain::model::{GenerationReport, NameField};
use crate::domain::ports::{ConfigProvider, GenerationObserver};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs one complete pass: load both lists, expand every pair, write the output file.
pub struct CrafterEngine<C: ConfigProvider> {
    config: C,
    files: LocalFiles,
    monitor: SystemMonitor,
}

impl<C: ConfigProvider> CrafterEngine<C> {
    pub fn new(config: C) -> Self {
        Self::new_with_monitoring(config, false)
    }

    pub fn new_with_monitoring(config: C, monitor_enabled: bool) -> Self {
        Self {
            config,
            files: LocalFiles::new(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<GenerationReport> {
        let observer = if self.monitor.is_enabled() {
            TracingObserver::with_monitor(&self.monitor)
        } else {
            TracingObserver::new()
        };
        self.run_with_observer(&observer)
    }

    pub fn run_with_observer<O: GenerationObserver + ?Sized>(
        &self,
        observer: &O,
    ) -> Result<GenerationReport> {
        let loader = NameListLoader::new(self.config.loader_options());

        // Inputs are loaded before the output is created so a bad input never clobbers it.
        let lastnames = loader.load(
            self.files
                .open_names(NameField::Lastname.as_str(), self.config.lastnames_path())?,
        )?;
        observer.names_loaded(NameField::Lastname, &lastnames);

        let firstnames = loader.load(
            self.files
                .open_names(NameField::Firstname.as_str(), self.config.firstnames_path())?,
        )?;
        observer.names_loaded(NameField::Firstname, &firstnames);

        let template = Template::from(self.config.format());
        if template.placeholders().is_empty() {
            tracing::warn!(
                "⚠️ Format '{}' contains no placeholders, every line will be identical",
                self.config.format()
            );
        }

        let generator = Generator::new(GenerateOptions {
            max_lines: self.config.max_lines(),
        });
        generator.check_limit(&firstnames, &lastnames)?;
        let output = self.files.create_output(self.config.output_path())?;

        let report = generator.generate(&firstnames, &lastnames, &template, output, observer)?;
        tracing::debug!("Output written to {}", self.config.output_path());

        Ok(report)
    }
}
