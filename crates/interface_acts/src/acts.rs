//! Act generation
//!
//! One act per owner ledger: build the context, pick the file name,
//! render, then run the exporters. A failure for one owner is reported
//! and the remaining owners still get their acts.

use std::path::PathBuf;

use chrono::NaiveDate;

use core_kernel::{DiagnosticsSink, Money, MoneyFormat, OwnerCode};
use domain_allocation::{LedgerSnapshot, OwnerLedger};

use crate::context::ActContext;
use crate::naming::act_file_stem;
use crate::render::{DocumentExporter, DocumentRenderer};

/// An act that was rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAct {
    pub owner_code: OwnerCode,
    pub file_stem: String,
    pub document: PathBuf,
    /// Outputs of exporters that succeeded
    pub exports: Vec<PathBuf>,
    pub items: usize,
    pub total_sum: Money,
}

/// Renders acts for every ledger of a snapshot
pub struct ActGenerator<'a> {
    renderer: &'a dyn DocumentRenderer,
    exporters: Vec<&'a dyn DocumentExporter>,
    format: MoneyFormat,
    file_name_pattern: String,
    date: NaiveDate,
}

impl<'a> ActGenerator<'a> {
    pub fn new(
        renderer: &'a dyn DocumentRenderer,
        format: MoneyFormat,
        file_name_pattern: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            renderer,
            exporters: Vec::new(),
            format,
            file_name_pattern: file_name_pattern.into(),
            date,
        }
    }

    /// Adds an exporter, run after each successful render in the order added
    pub fn with_exporter(mut self, exporter: &'a dyn DocumentExporter) -> Self {
        self.exporters.push(exporter);
        self
    }

    /// Generates all acts, in owner-code order
    pub fn generate(
        &self,
        snapshot: &LedgerSnapshot<'_>,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Vec<GeneratedAct> {
        let mut acts = Vec::with_capacity(snapshot.ledgers.len());
        for (code, ledger) in &snapshot.ledgers {
            if let Some(act) = self.generate_one(code, ledger, diagnostics) {
                acts.push(act);
            }
        }
        acts
    }

    fn generate_one(
        &self,
        code: &OwnerCode,
        ledger: &OwnerLedger<'_>,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Option<GeneratedAct> {
        if ledger.items().is_empty() {
            diagnostics.info(None, "owner_without_items", format!("Owner {code} has no items; skipping."));
            return None;
        }

        let context = ActContext::build(ledger, &self.format, diagnostics);
        let file_stem = act_file_stem(&self.file_name_pattern, &ledger.department().code, self.date);

        let document = match self.renderer.render(&context, &file_stem) {
            Ok(path) => path,
            Err(err) => {
                diagnostics.error(
                    None,
                    "render_failed",
                    format!("Document creation failed for {code}: {err}"),
                );
                return None;
            }
        };

        let mut exports = Vec::new();
        for exporter in &self.exporters {
            match exporter.export(&document, &file_stem) {
                Ok(path) => exports.push(path),
                Err(err) => diagnostics.warning(
                    None,
                    "export_failed",
                    format!("{} export failed for {code}: {err}", exporter.name()),
                ),
            }
        }

        diagnostics.info(
            None,
            "act_created",
            format!(
                "Created act \"{}\" - items={} - sum={}",
                document.display(),
                ledger.items().len(),
                self.format.format(ledger.total_sum().amount())
            ),
        );

        Some(GeneratedAct {
            owner_code: code.clone(),
            file_stem,
            document,
            exports,
            items: ledger.items().len(),
            total_sum: ledger.total_sum(),
        })
    }
}
