//! Read-only network reporting
//!
//! Aggregates the graph store and scorer state into summaries, rankings, and
//! cross-bias matrices. Nothing here mutates: quantities that must be fresh
//! (the average echo score) are computed through the pure scorer paths, and
//! score-sorted listings read whatever the scorers last wrote.

use crate::chambers::EchoChamberDetector;
use crate::graph::CitationGraph;
use newsgraph_common::config::ReportingConfig;
use newsgraph_common::models::{BiasLabel, Source};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Entry in a most-cited or most-citing ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSource {
    /// Source name
    pub name: String,

    /// Citations received (most-cited) or made (most-citing)
    pub count: u64,
}

/// Network-wide statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Registered sources
    pub total_sources: usize,

    /// Recorded citations (edge instances)
    pub total_citations: usize,

    /// total_citations / total_sources
    pub avg_citations_per_source: f64,

    /// Top sources by citations received, count desc then name asc
    pub most_cited: Vec<RankedSource>,

    /// Top sources by citations made, count desc then name asc
    pub most_citing: Vec<RankedSource>,

    /// Mean per-source echo score across all registered sources
    pub avg_echo_chamber_score: f64,

    /// Distinct non-self edges / N(N-1); multi-edges count once here
    pub network_density: f64,
}

/// Sort key for source listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSort {
    /// Stored authority score, descending
    #[default]
    Authority,

    /// Citations received, descending
    CitationsReceived,

    /// Citations made, descending
    CitationsMade,

    /// Stored echo score, descending
    EchoChamberScore,

    /// Source name, ascending
    Name,
}

/// Filter and ordering for [`NetworkReporter::sources`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceFilter {
    /// Keep sources with at least this many total citations (made + received)
    pub min_citations: Option<u64>,

    /// Keep sources with this live bias label
    pub bias: Option<BiasLabel>,

    /// Sort key; every key except `Name` breaks ties by name ascending
    pub sort_by: SourceSort,
}

impl SourceFilter {
    pub fn min_citations(mut self, min: u64) -> Self {
        self.min_citations = Some(min);
        self
    }

    pub fn bias(mut self, bias: BiasLabel) -> Self {
        self.bias = Some(bias);
        self
    }

    pub fn sort_by(mut self, sort: SourceSort) -> Self {
        self.sort_by = sort;
        self
    }
}

/// Citation counts between bias labels, on frozen citation-time labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossBiasReport {
    /// matrix[from][to] = citation count, every label pair present
    pub matrix: BTreeMap<BiasLabel, BTreeMap<BiasLabel, u64>>,

    /// Citations whose frozen labels matched
    pub total_same_bias: u64,

    /// Citations whose frozen labels differed
    pub total_cross_bias: u64,
}

/// Graph snapshot for visualization front-ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

/// Node row in a network export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub domain: String,
    pub bias: BiasLabel,
    pub authority: f64,
    pub echo_score: f64,
    pub citations_made: u64,
    pub citations_received: u64,
}

/// Aggregated edge row in a network export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// Read-only reporting over a citation graph.
pub struct NetworkReporter<'a> {
    graph: &'a CitationGraph,
    config: ReportingConfig,
}

impl<'a> NetworkReporter<'a> {
    /// Create a reporter over the given graph
    pub fn new(graph: &'a CitationGraph, config: ReportingConfig) -> Self {
        Self { graph, config }
    }

    /// Network-wide summary statistics.
    pub fn summary(&self) -> NetworkSummary {
        let total_sources = self.graph.source_count();
        let total_citations = self.graph.citation_count();

        let avg_citations_per_source = if total_sources > 0 {
            total_citations as f64 / total_sources as f64
        } else {
            0.0
        };

        // Echo average from the live counters via the pure formula, so the
        // summary never depends on a stale writeback.
        let counts = EchoChamberDetector::source_bias_counts(self.graph);
        let avg_echo_chamber_score = if total_sources > 0 {
            let sum: f64 = self
                .graph
                .sources()
                .map(|source| {
                    let (same, different) =
                        counts.get(&source.name).copied().unwrap_or((0, 0));
                    EchoChamberDetector::echo_score(same, different)
                })
                .sum();
            sum / total_sources as f64
        } else {
            0.0
        };

        let network_density = if total_sources > 1 {
            self.graph.unique_edge_count() as f64
                / (total_sources as f64 * (total_sources as f64 - 1.0))
        } else {
            0.0
        };

        NetworkSummary {
            total_sources,
            total_citations,
            avg_citations_per_source,
            most_cited: self.rank_by(|source| source.citations_received),
            most_citing: self.rank_by(|source| source.citations_made),
            avg_echo_chamber_score,
            network_density,
        }
    }

    /// Filtered, sorted source listing.
    pub fn sources(&self, filter: &SourceFilter) -> Vec<Source> {
        let mut sources: Vec<Source> = self
            .graph
            .sources()
            .filter(|source| match filter.min_citations {
                Some(min) => source.citations_made + source.citations_received >= min,
                None => true,
            })
            .filter(|source| match filter.bias {
                Some(bias) => source.political_bias == bias,
                None => true,
            })
            .cloned()
            .collect();

        match filter.sort_by {
            SourceSort::Authority => {
                sources.sort_by(|a, b| descending_f64(a.authority_score, b.authority_score, a, b))
            }
            SourceSort::CitationsReceived => sources.sort_by(|a, b| {
                b.citations_received
                    .cmp(&a.citations_received)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SourceSort::CitationsMade => sources.sort_by(|a, b| {
                b.citations_made
                    .cmp(&a.citations_made)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SourceSort::EchoChamberScore => sources.sort_by(|a, b| {
                descending_f64(a.echo_chamber_score, b.echo_chamber_score, a, b)
            }),
            // The registry iterates name-ascending already.
            SourceSort::Name => {}
        }
        sources
    }

    /// Bias-by-bias citation counts from the frozen citation-time labels.
    pub fn cross_bias_matrix(&self) -> CrossBiasReport {
        let mut matrix: BTreeMap<BiasLabel, BTreeMap<BiasLabel, u64>> = BTreeMap::new();
        for from in BiasLabel::ALL {
            let row = matrix.entry(from).or_default();
            for to in BiasLabel::ALL {
                row.insert(to, 0);
            }
        }

        let mut total_same_bias = 0u64;
        let mut total_cross_bias = 0u64;
        for citation in self.graph.citations() {
            let from = citation.from_bias.unwrap_or(BiasLabel::Unknown);
            let to = citation.to_bias.unwrap_or(BiasLabel::Unknown);
            if let Some(count) = matrix.get_mut(&from).and_then(|row| row.get_mut(&to)) {
                *count += 1;
            }
            if from == to {
                total_same_bias += 1;
            } else {
                total_cross_bias += 1;
            }
        }

        CrossBiasReport {
            matrix,
            total_same_bias,
            total_cross_bias,
        }
    }

    /// Snapshot for visualization: every source as a node, citations
    /// aggregated into weighted edges.
    pub fn export(&self) -> NetworkExport {
        let nodes = self
            .graph
            .sources()
            .map(|source| ExportNode {
                id: source.name.clone(),
                domain: source.domain.clone(),
                bias: source.political_bias,
                authority: source.authority_score,
                echo_score: source.echo_chamber_score,
                citations_made: source.citations_made,
                citations_received: source.citations_received,
            })
            .collect();

        let mut weights: BTreeMap<(String, String), u64> = BTreeMap::new();
        for citation in self.graph.citations() {
            *weights
                .entry((citation.from_source.clone(), citation.to_source.clone()))
                .or_insert(0) += 1;
        }
        let edges = weights
            .into_iter()
            .map(|((source, target), weight)| ExportEdge {
                source,
                target,
                weight,
            })
            .collect();

        NetworkExport { nodes, edges }
    }

    fn rank_by(&self, count: impl Fn(&Source) -> u64) -> Vec<RankedSource> {
        let mut ranked: Vec<RankedSource> = self
            .graph
            .sources()
            .map(|source| RankedSource {
                name: source.name.clone(),
                count: count(source),
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(self.config.top_n);
        ranked
    }
}

fn descending_f64(a_key: f64, b_key: f64, a: &Source, b: &Source) -> Ordering {
    b_key
        .partial_cmp(&a_key)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.cmp(&b.name))
}
