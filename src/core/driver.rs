use crate::config::toml_config::FixtureConfig;
use crate::domain::model::Document;
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::Result;
use std::io::Write;

pub struct FixtureDriver<C: Clock = SystemClock> {
    config: FixtureConfig,
    clock: C,
}

impl FixtureDriver<SystemClock> {
    pub fn new(config: FixtureConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> FixtureDriver<C> {
    pub fn with_clock(config: FixtureConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn build(&self) -> Document {
        let doc = self.config.build_document(&self.clock);
        tracing::debug!(
            "Built document '{}' with {} items ({} active)",
            doc.name,
            doc.item_count(),
            doc.active_count()
        );
        doc
    }

    /// Builds the document and writes the four report lines to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Document> {
        let doc = self.build();
        for line in report_lines(&doc) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(doc)
    }
}

pub fn report_lines(doc: &Document) -> [String; 4] {
    [
        format!("Document: {}", doc.name),
        format!("Active items: {}", doc.active_count()),
        format!("Total price: ${:.2}", doc.total_price()),
        format!("Document: {}", doc.describe()),
    ]
}
