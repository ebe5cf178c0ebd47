//! The detection sweep.

use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;
use serde::Serialize;
use showcase_dom::Document;
use tracing::{debug, info, warn};

use crate::badge::{FallbackInsert, show_fallback_message, update_support_badge};
use crate::capability::Runtime;
use crate::config::DetectorConfig;
use crate::error::DetectResult;
use crate::registry::{FeatureEntry, FeatureRegistry};

/// Diagnostic view of one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStatus {
    /// Human-readable label.
    pub display_name: String,
    /// Detection result.
    pub supported: bool,
}

/// Runs a registry's predicates and reflects the results in the document.
#[derive(Debug, Clone)]
pub struct FeatureDetector {
    registry: FeatureRegistry,
    config: DetectorConfig,
}

impl Default for FeatureDetector {
    fn default() -> Self {
        Self::new(FeatureRegistry::builtin(), DetectorConfig::default())
    }
}

impl FeatureDetector {
    /// Creates a detector for `registry`.
    pub fn new(registry: FeatureRegistry, config: DetectorConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Evaluates one entry. A predicate that errors or panics counts as unsupported.
    pub fn evaluate(&self, entry: &FeatureEntry, runtime: &dyn Runtime) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(|| entry.detect(runtime))) {
            Ok(Ok(supported)) => supported,
            Ok(Err(err)) => {
                warn!(feature = entry.id(), error = %err, "feature probe failed");
                false
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| String::from("unknown panic"));
                warn!(feature = entry.id(), panic = %message, "feature probe panicked");
                false
            }
        }
    }

    /// Probes every feature in registration order, updating badges and
    /// inserting fallback messages for unsupported ones.
    ///
    /// Side effects for one entry finish before the next entry is probed.
    /// Repeated sweeps never insert a second fallback message.
    pub fn detect_all(&self, runtime: &dyn Runtime, document: &mut Document) -> IndexMap<String, bool> {
        let mut results = IndexMap::with_capacity(self.registry.len());

        for entry in &self.registry {
            let supported = self.evaluate(entry, runtime);
            debug!(
                feature = entry.id(),
                section = entry.section_id(),
                supported,
                "feature probed"
            );

            if let Err(err) = self.apply(entry, supported, document) {
                warn!(feature = entry.id(), error = %err, "failed to update section");
            }
            results.insert(entry.id().to_string(), supported);
        }

        let supported = results.values().filter(|s| **s).count();
        info!(
            supported,
            total = results.len(),
            "feature detection complete"
        );
        results
    }

    fn apply(
        &self,
        entry: &FeatureEntry,
        supported: bool,
        document: &mut Document,
    ) -> DetectResult<()> {
        update_support_badge(document, &self.config, entry.section_id(), supported)?;
        if !supported {
            if let FallbackInsert::Inserted(_) =
                show_fallback_message(document, &self.config, entry.section_id())?
            {
                debug!(section = entry.section_id(), "fallback message inserted");
            }
        }
        Ok(())
    }

    /// Recomputes every result without touching the document.
    pub fn detection_results(&self, runtime: &dyn Runtime) -> IndexMap<String, FeatureStatus> {
        self.registry
            .iter()
            .map(|entry| {
                let status = FeatureStatus {
                    display_name: entry.display_name().to_string(),
                    supported: self.evaluate(entry, runtime),
                };
                (entry.id().to_string(), status)
            })
            .collect()
    }

    /// Renders [`detection_results`](Self::detection_results) as pretty JSON.
    pub fn detection_report_json(&self, runtime: &dyn Runtime) -> DetectResult<String> {
        Ok(serde_json::to_string_pretty(
            &self.detection_results(runtime),
        )?)
    }
}
