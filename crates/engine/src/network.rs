//! Citation network facade
//!
//! One owned object wiring the graph store, scorers, detector, and reporter
//! behind the engine's public method surface. Multiple independent networks
//! can coexist; there is no module-level state.

use crate::authority::AuthorityScorer;
use crate::chambers::EchoChamberDetector;
use crate::graph::CitationGraph;
use crate::report::{
    CrossBiasReport, NetworkExport, NetworkReporter, NetworkSummary, SourceFilter,
};
use newsgraph_common::config::EngineConfig;
use newsgraph_common::errors::Result;
use newsgraph_common::models::{BiasLabel, Citation, EchoChamber, Source};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Handle for embedding the engine in a concurrent host: one exclusive lock
/// guards the whole engine, reads and writes alike.
pub type SharedCitationNetwork = Arc<Mutex<CitationNetwork>>;

/// A citation network over news sources.
///
/// All operations are synchronous and run to completion; none suspend. The
/// engine itself is single-threaded; wrap it in [`SharedCitationNetwork`]
/// when a request-serving process needs to share it.
pub struct CitationNetwork {
    graph: CitationGraph,
    config: EngineConfig,
}

impl CitationNetwork {
    /// Create an empty network with default configuration.
    pub fn new() -> Self {
        Self {
            graph: CitationGraph::new(),
            config: EngineConfig::default(),
        }
    }

    /// Create an empty network with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph: CitationGraph::new(),
            config,
        })
    }

    /// Register a news source. Fails on duplicate names.
    pub fn add_source(
        &mut self,
        name: impl Into<String>,
        domain: impl Into<String>,
        bias: BiasLabel,
    ) -> Result<()> {
        self.graph.add_source(name, domain, bias)
    }

    /// Record a citation. Fails if either endpoint is unregistered, leaving
    /// all counts untouched.
    pub fn add_citation(&mut self, citation: Citation) -> Result<()> {
        self.graph.add_citation(citation)
    }

    /// Correct a source's live bias label.
    pub fn set_source_bias(&mut self, name: &str, bias: BiasLabel) -> Result<()> {
        self.graph.set_source_bias(name, bias)
    }

    /// Recompute every source's authority score.
    pub fn calculate_authority_scores(&mut self) {
        AuthorityScorer::new(self.config.authority.clone()).apply(&mut self.graph);
    }

    /// Recompute every source's same/different bias counters and echo score.
    pub fn calculate_echo_chamber_scores(&mut self) {
        EchoChamberDetector::new(self.config.detection.clone())
            .recompute_source_scores(&mut self.graph);
    }

    /// Detect echo chambers. `min_size` falls back to the configured
    /// threshold (default 3).
    pub fn detect_echo_chambers(&self, min_size: Option<usize>) -> Vec<EchoChamber> {
        EchoChamberDetector::new(self.config.detection.clone()).detect(&self.graph, min_size)
    }

    /// Network-wide summary statistics.
    pub fn get_network_summary(&self) -> NetworkSummary {
        self.reporter().summary()
    }

    /// Filtered, sorted source listing.
    pub fn get_sources(&self, filter: &SourceFilter) -> Vec<Source> {
        self.reporter().sources(filter)
    }

    /// Bias-by-bias citation matrix on frozen labels.
    pub fn get_cross_bias_matrix(&self) -> CrossBiasReport {
        self.reporter().cross_bias_matrix()
    }

    /// Snapshot for visualization front-ends.
    pub fn export(&self) -> NetworkExport {
        self.reporter().export()
    }

    /// Look up one source.
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.graph.source(name)
    }

    /// Read access to the underlying graph store.
    pub fn graph(&self) -> &CitationGraph {
        &self.graph
    }

    /// Clear the entire network, keeping the configuration.
    pub fn reset(&mut self) {
        info!(
            sources = self.graph.source_count(),
            citations = self.graph.citation_count(),
            "Resetting citation network"
        );
        self.graph.reset();
    }

    /// Wrap the engine for shared use behind a single exclusive lock.
    pub fn into_shared(self) -> SharedCitationNetwork {
        Arc::new(Mutex::new(self))
    }

    fn reporter(&self) -> NetworkReporter<'_> {
        NetworkReporter::new(&self.graph, self.config.reporting.clone())
    }
}

impl Default for CitationNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_round_trip() {
        let mut network = CitationNetwork::new();
        network.add_source("A", "a.com", BiasLabel::Left).unwrap();
        network.add_source("B", "b.com", BiasLabel::Right).unwrap();
        network.add_citation(Citation::hyperlink("A", "B")).unwrap();

        network.calculate_authority_scores();
        network.calculate_echo_chamber_scores();

        let summary = network.get_network_summary();
        assert_eq!(summary.total_sources, 2);
        assert_eq!(summary.total_citations, 1);

        let sources = network.get_sources(&SourceFilter::default());
        assert_eq!(sources.len(), 2);
        // B is cited, so it carries the higher authority and sorts first.
        assert_eq!(sources[0].name, "B");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.authority.damping = 2.0;
        assert!(CitationNetwork::with_config(config).is_err());
    }

    #[test]
    fn test_shared_network_locking() {
        let mut network = CitationNetwork::new();
        network.add_source("A", "a.com", BiasLabel::Center).unwrap();
        let shared = network.into_shared();

        {
            let mut guard = shared.lock().unwrap();
            guard.add_source("B", "b.com", BiasLabel::Center).unwrap();
            guard.add_citation(Citation::hyperlink("A", "B")).unwrap();
        }

        let guard = shared.lock().unwrap();
        assert_eq!(guard.get_network_summary().total_citations, 1);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut config = EngineConfig::default();
        config.detection.min_chamber_size = 2;
        let mut network = CitationNetwork::with_config(config).unwrap();
        network.add_source("A", "a.com", BiasLabel::Left).unwrap();
        network.reset();

        assert_eq!(network.get_network_summary().total_sources, 0);
        network.add_source("A", "a.com", BiasLabel::Left).unwrap();
        network.add_source("B", "b.com", BiasLabel::Left).unwrap();
        network.add_citation(Citation::hyperlink("A", "B")).unwrap();
        network.add_citation(Citation::hyperlink("B", "A")).unwrap();
        // min_chamber_size 2 survived the reset.
        assert_eq!(network.detect_echo_chambers(None).len(), 1);
    }
}
