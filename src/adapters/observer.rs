use crate::domain::model::{GenerationReport, NameField, NameList};
use crate::domain::ports::GenerationObserver;
use crate::utils::monitor::SystemMonitor;

/// Reports run progress through `tracing`, plus process stats when a monitor is attached.
pub struct TracingObserver<'a> {
    monitor: Option<&'a SystemMonitor>,
}

impl<'a> TracingObserver<'a> {
    pub fn new() -> Self {
        Self { monitor: None }
    }

    pub fn with_monitor(monitor: &'a SystemMonitor) -> Self {
        Self {
            monitor: Some(monitor),
        }
    }
}

impl Default for TracingObserver<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationObserver for TracingObserver<'_> {
    fn names_loaded(&self, field: NameField, names: &NameList) {
        tracing::info!("[+] - Loaded {} {}", names.len(), field.as_str());
        if names.is_empty() {
            tracing::warn!("⚠️ The {} list is empty, no lines will be generated", field.as_str());
        }
        if let Some(monitor) = self.monitor {
            monitor.log_stats(&format!("{} loaded", field.as_str()));
        }
    }

    fn generation_started(&self, firstnames: usize, lastnames: usize) {
        tracing::info!(
            "🚀 Generating {} combinations ({} firstnames x {} lastnames)",
            firstnames as u128 * lastnames as u128,
            firstnames,
            lastnames
        );
    }

    fn generation_finished(&self, report: &GenerationReport) {
        tracing::info!(
            "[+] - Generating file took: {:.2} seconds",
            report.elapsed.as_secs_f64()
        );
        tracing::debug!(
            "Run started at {} wrote {} lines ({} bytes)",
            report.started_at.to_rfc3339(),
            report.lines_written,
            report.bytes_written
        );
        if let Some(monitor) = self.monitor {
            monitor.log_final_stats();
        }
    }
}
