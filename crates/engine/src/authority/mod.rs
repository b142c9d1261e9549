//! PageRank-style authority scoring
//!
//! A source is authoritative if authoritative sources cite it. Scores are
//! propagated over the directed citation multigraph with per-citation edge
//! weights (a source cited three times receives three shares).

use crate::graph::CitationGraph;
use newsgraph_common::config::AuthorityConfig;
use newsgraph_common::metrics::AUTHORITY_ITERATIONS;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Authority scorer over a citation graph.
pub struct AuthorityScorer {
    config: AuthorityConfig,
}

impl AuthorityScorer {
    /// Create a new scorer
    pub fn new(config: AuthorityConfig) -> Self {
        Self { config }
    }

    /// Compute authority scores for every participating source.
    ///
    /// Pure function over the graph's current citation log: no writeback, no
    /// partial state. Only sources touching at least one citation appear in
    /// the result; their scores sum to 1.0. Isolated sources are the
    /// caller's concern (they score 0).
    ///
    /// Semantics:
    /// - synchronous update: each iteration reads the previous complete
    ///   vector, so insertion order cannot influence the result
    /// - self-citations are excluded from both the numerator and the donor's
    ///   out-degree
    /// - dangling sources (no outgoing non-self citation) spread their mass
    ///   uniformly over all participating sources
    /// - stops on L1 change < epsilon or at the iteration cap, whichever
    ///   comes first; hitting the cap is logged, never an error
    pub fn compute(&self, graph: &CitationGraph) -> HashMap<String, f64> {
        let active: Vec<&str> = graph.participating_names().collect();
        let n = active.len();
        if n == 0 {
            return HashMap::new();
        }

        let index: HashMap<&str, usize> = active
            .iter()
            .enumerate()
            .map(|(i, &name)| (name, i))
            .collect();

        // Donor out-degrees with self-citations removed.
        let out_degrees: Vec<usize> = active
            .iter()
            .map(|&name| graph.out_degree_excluding_self(name))
            .collect();

        // In-edge lists with multiplicity; every citation endpoint is a
        // participating source, so the index lookups always hit.
        let mut in_edges: Vec<Vec<usize>> = vec![Vec::new(); n];
        for citation in graph.citations() {
            if citation.is_self_citation() {
                continue;
            }
            if let (Some(&from), Some(&to)) = (
                index.get(citation.from_source.as_str()),
                index.get(citation.to_source.as_str()),
            ) {
                in_edges[to].push(from);
            }
        }

        let n_f = n as f64;
        let damping = self.config.damping;
        let mut scores = vec![1.0 / n_f; n];
        let mut iterations = 0usize;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            iterations += 1;

            let dangling_mass: f64 = scores
                .iter()
                .zip(&out_degrees)
                .filter(|(_, &deg)| deg == 0)
                .map(|(score, _)| score)
                .sum();
            let base = (1.0 - damping) / n_f + damping * dangling_mass / n_f;

            let mut next = vec![0.0; n];
            for (node, next_score) in next.iter_mut().enumerate() {
                let inbound: f64 = in_edges[node]
                    .iter()
                    .map(|&donor| scores[donor] / out_degrees[donor] as f64)
                    .sum();
                *next_score = base + damping * inbound;
            }

            let l1_change: f64 = next
                .iter()
                .zip(&scores)
                .map(|(new, old)| (new - old).abs())
                .sum();
            scores = next;

            if l1_change < self.config.epsilon {
                converged = true;
                break;
            }
        }

        metrics::histogram!(AUTHORITY_ITERATIONS).record(iterations as f64);
        if converged {
            debug!(iterations, sources = n, "Authority scores converged");
        } else {
            warn!(
                iterations,
                sources = n,
                "Authority scoring hit the iteration cap; returning best-effort scores"
            );
        }

        // Guard against floating-point drift from the long iteration.
        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            for score in &mut scores {
                *score /= total;
            }
        }

        active
            .into_iter()
            .zip(scores)
            .map(|(name, score)| (name.to_string(), score))
            .collect()
    }

    /// Compute and write scores back onto the sources. Participating sources
    /// receive their computed score, isolated sources 0.0.
    pub fn apply(&self, graph: &mut CitationGraph) {
        let scores = self.compute(graph);
        let names: Vec<String> = graph.source_names().map(str::to_string).collect();
        for name in names {
            let score = scores.get(&name).copied().unwrap_or(0.0);
            graph.set_authority_score(&name, score);
        }
    }
}

impl Default for AuthorityScorer {
    fn default() -> Self {
        Self::new(AuthorityConfig::default())
    }
}
