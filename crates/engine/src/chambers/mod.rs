//! Echo chamber detection and insularity scoring
//!
//! Partitions the citation graph into communities that cite themselves
//! disproportionately and quantifies how insular each source and each
//! community is.

mod community;

pub use community::detect_communities;

use crate::graph::CitationGraph;
use newsgraph_common::config::DetectionConfig;
use newsgraph_common::metrics::CHAMBERS_DETECTED;
use newsgraph_common::models::{BiasLabel, EchoChamber};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Echo chamber detector over a citation graph.
pub struct EchoChamberDetector {
    config: DetectionConfig,
}

impl EchoChamberDetector {
    /// Create a new detector
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Per-source same/different outgoing citation counts, rebuilt from the
    /// citation log's frozen labels. Self-citations count in neither bucket.
    pub fn source_bias_counts(graph: &CitationGraph) -> BTreeMap<String, (u64, u64)> {
        let mut counts: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for citation in graph.citations() {
            if citation.is_self_citation() {
                continue;
            }
            let entry = counts.entry(citation.from_source.clone()).or_insert((0, 0));
            match citation.is_cross_bias() {
                Some(true) => entry.1 += 1,
                _ => entry.0 += 1,
            }
        }
        counts
    }

    /// Echo score for one same/different count pair.
    ///
    /// `same / max(1, same + different)`: a source with no outgoing citations
    /// scores 0 rather than being undefined, since absence of citation
    /// behavior is not evidence of insularity.
    pub fn echo_score(same: u64, different: u64) -> f64 {
        same as f64 / (same + different).max(1) as f64
    }

    /// Recompute every source's same/different counters and echo score from
    /// the citation log and write them back.
    pub fn recompute_source_scores(&self, graph: &mut CitationGraph) {
        let counts = Self::source_bias_counts(graph);
        let names: Vec<String> = graph.source_names().map(str::to_string).collect();
        for name in names {
            let (same, different) = counts.get(&name).copied().unwrap_or((0, 0));
            graph.set_echo_fields(&name, same, different, Self::echo_score(same, different));
        }
    }

    /// Detect echo chambers.
    ///
    /// Communities come from greedy modularity maximization over the
    /// undirected weighted projection; only communities of at least
    /// `min_size` members (default from config) are reported. Chambers are
    /// ordered most-insular first and numbered in that order; ids are stable
    /// only within a single call.
    ///
    /// An empty or edge-less graph yields an empty list.
    pub fn detect(&self, graph: &CitationGraph, min_size: Option<usize>) -> Vec<EchoChamber> {
        let min_size = min_size.unwrap_or(self.config.min_chamber_size);
        let mut chambers: Vec<EchoChamber> = detect_communities(graph)
            .into_iter()
            .filter(|members| members.len() >= min_size)
            .map(|members| self.build_chamber(graph, members))
            .collect();

        // Most insular first; equal scores keep the deterministic
        // smallest-member order the partition came in.
        chambers.sort_by(|a, b| {
            b.insularity_score
                .partial_cmp(&a.insularity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (chamber_id, chamber) in chambers.iter_mut().enumerate() {
            chamber.chamber_id = chamber_id;
        }

        metrics::gauge!(CHAMBERS_DETECTED).set(chambers.len() as f64);
        debug!(
            chambers = chambers.len(),
            min_size, "Echo chamber detection finished"
        );
        chambers
    }

    fn build_chamber(&self, graph: &CitationGraph, members: Vec<String>) -> EchoChamber {
        let member_set: HashSet<&str> = members.iter().map(String::as_str).collect();

        // Edge-instance counts over every directed citation touching a
        // member, as citer or as cited. Self-citations help neither side of
        // the insularity ratio.
        let mut internal = 0u64;
        let mut external = 0u64;
        for citation in graph.citations() {
            if citation.is_self_citation() {
                continue;
            }
            let from_inside = member_set.contains(citation.from_source.as_str());
            let to_inside = member_set.contains(citation.to_source.as_str());
            match (from_inside, to_inside) {
                (true, true) => internal += 1,
                (true, false) | (false, true) => external += 1,
                (false, false) => {}
            }
        }

        EchoChamber {
            chamber_id: 0, // assigned after ordering
            dominant_bias: dominant_bias(graph, &members),
            internal_citations: internal,
            external_citations: external,
            insularity_score: internal as f64 / (internal + external).max(1) as f64,
            avg_authority: mean_authority(graph, &members),
            sources: members,
        }
    }
}

impl Default for EchoChamberDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

/// Mode of the members' live bias labels; ties go to the label that comes
/// first in the fixed `BiasLabel` order.
fn dominant_bias(graph: &CitationGraph, members: &[String]) -> BiasLabel {
    let mut counts: BTreeMap<BiasLabel, usize> = BTreeMap::new();
    for name in members {
        if let Some(source) = graph.source(name) {
            *counts.entry(source.political_bias).or_insert(0) += 1;
        }
    }

    let mut dominant = BiasLabel::Unknown;
    let mut best = 0usize;
    for (label, count) in counts {
        // BTreeMap iterates in label order, so strict > keeps the earliest.
        if count > best {
            best = count;
            dominant = label;
        }
    }
    dominant
}

fn mean_authority(graph: &CitationGraph, members: &[String]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let sum: f64 = members
        .iter()
        .filter_map(|name| graph.source(name))
        .map(|source| source.authority_score)
        .sum();
    sum / members.len() as f64
}
