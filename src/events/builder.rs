use std::sync::Arc;

use crate::config::BusConfig;
use crate::events::Bus;
use crate::listeners::{ReportUnhandled, TracingReporter};

/// Builder for constructing a [`Bus`] with optional collaborators.
pub struct BusBuilder {
    cfg: BusConfig,
    reporter: Option<Arc<dyn ReportUnhandled>>,
}

impl BusBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            cfg,
            reporter: None,
        }
    }

    /// Sets the sink for listener failures.
    ///
    /// Defaults to [`TracingReporter`].
    pub fn with_reporter(mut self, reporter: Arc<dyn ReportUnhandled>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Builds and returns the bus.
    pub fn build(self) -> Arc<Bus> {
        let reporter = self
            .reporter
            .unwrap_or_else(|| Arc::new(TracingReporter) as Arc<dyn ReportUnhandled>);
        Arc::new(Bus::new_internal(self.cfg, reporter))
    }
}
