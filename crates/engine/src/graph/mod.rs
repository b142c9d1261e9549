//! In-memory citation graph store
//!
//! Authoritative registry of sources and citations. Owns all mutation:
//! registration, citation insertion, and the running per-source counters.
//! Scorers and the reporter only ever read from here (score writeback goes
//! through dedicated crate-internal setters).

use newsgraph_common::errors::{EngineError, Result};
use newsgraph_common::models::{BiasLabel, Citation, Source};
use newsgraph_common::metrics::{CITATIONS_ADDED, CITATIONS_REJECTED, SOURCES_REGISTERED};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Directed citation multigraph over registered news sources.
///
/// Sources are keyed by their unique, case-sensitive name. The registry is a
/// `BTreeMap` so every iteration is name-ordered; ranking tie-breaks and
/// community numbering depend on that determinism.
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    /// Registered sources keyed by name
    sources: BTreeMap<String, Source>,

    /// Append-only citation log, bias labels frozen at insertion
    citations: Vec<Citation>,

    /// Adjacency list: source -> cited names, one entry per citation
    outgoing: HashMap<String, Vec<String>>,

    /// Reverse adjacency: source -> citing names, one entry per citation
    incoming: HashMap<String, Vec<String>>,
}

impl CitationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a news source.
    ///
    /// Fails with [`EngineError::DuplicateSource`] if the name is already
    /// registered; re-registration is not idempotent by design.
    pub fn add_source(
        &mut self,
        name: impl Into<String>,
        domain: impl Into<String>,
        bias: BiasLabel,
    ) -> Result<()> {
        let name = name.into();
        if self.sources.contains_key(&name) {
            return Err(EngineError::DuplicateSource { name });
        }

        debug!(source = %name, bias = %bias, "Registering source");
        self.sources
            .insert(name.clone(), Source::new(name, domain, bias));
        metrics::counter!(SOURCES_REGISTERED).increment(1);
        Ok(())
    }

    /// Insert a citation between two registered sources.
    ///
    /// Both endpoints are validated before any state changes, so a rejected
    /// citation leaves every counter untouched. Unset bias labels are stamped
    /// from the live source bias and frozen. Self-citations are counted in
    /// `citations_made`/`citations_received` but in neither bias bucket.
    pub fn add_citation(&mut self, mut citation: Citation) -> Result<()> {
        for endpoint in [&citation.from_source, &citation.to_source] {
            if !self.sources.contains_key(endpoint) {
                metrics::counter!(CITATIONS_REJECTED).increment(1);
                return Err(EngineError::UnknownSource {
                    name: endpoint.clone(),
                });
            }
        }

        // Freeze the bias attribution as observed right now.
        if citation.from_bias.is_none() {
            citation.from_bias = self.sources.get(&citation.from_source).map(|s| s.political_bias);
        }
        if citation.to_bias.is_none() {
            citation.to_bias = self.sources.get(&citation.to_source).map(|s| s.political_bias);
        }

        let cross_bias = citation.is_cross_bias();
        let self_citation = citation.is_self_citation();

        self.outgoing
            .entry(citation.from_source.clone())
            .or_default()
            .push(citation.to_source.clone());
        self.incoming
            .entry(citation.to_source.clone())
            .or_default()
            .push(citation.from_source.clone());

        if let Some(from) = self.sources.get_mut(&citation.from_source) {
            from.citations_made += 1;
            if !self_citation {
                match cross_bias {
                    Some(true) => from.different_bias_citations += 1,
                    _ => from.same_bias_citations += 1,
                }
            }
        }
        if let Some(to) = self.sources.get_mut(&citation.to_source) {
            to.citations_received += 1;
        }

        debug!(
            from = %citation.from_source,
            to = %citation.to_source,
            kind = ?citation.citation_type,
            "Citation added"
        );
        self.citations.push(citation);
        metrics::counter!(CITATIONS_ADDED).increment(1);
        Ok(())
    }

    /// Whether a source name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Look up a registered source.
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sources.get(name)
    }

    /// Correct a source's live bias label. Frozen labels on already-recorded
    /// citations are unaffected.
    pub fn set_source_bias(&mut self, name: &str, bias: BiasLabel) -> Result<()> {
        match self.sources.get_mut(name) {
            Some(source) => {
                source.political_bias = bias;
                Ok(())
            }
            None => Err(EngineError::UnknownSource { name: name.into() }),
        }
    }

    /// All registered sources in name order.
    pub fn sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.values()
    }

    /// Registered source names in ascending order.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Names of sources touching at least one citation, in ascending order.
    pub fn participating_names(&self) -> impl Iterator<Item = &str> {
        self.sources
            .values()
            .filter(|s| s.is_participating())
            .map(|s| s.name.as_str())
    }

    /// The full citation log, in insertion order.
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    /// Number of registered sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Number of recorded citations (edge instances).
    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }

    /// Cited names, one entry per citation (a source cited 3 times appears
    /// 3 times). Restartable: each call yields a fresh iterator.
    pub fn neighbors_out<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.outgoing
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Citing names with multiplicity, mirror of [`Self::neighbors_out`].
    pub fn neighbors_in<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.incoming
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Outgoing citation count including self-citations.
    pub fn out_degree(&self, name: &str) -> usize {
        self.outgoing.get(name).map(Vec::len).unwrap_or(0)
    }

    /// Incoming citation count including self-citations.
    pub fn in_degree(&self, name: &str) -> usize {
        self.incoming.get(name).map(Vec::len).unwrap_or(0)
    }

    /// Outgoing citation count with self-citations removed; the donor
    /// denominator for authority propagation.
    pub fn out_degree_excluding_self(&self, name: &str) -> usize {
        self.neighbors_out(name).filter(|&to| to != name).count()
    }

    /// Distinct ordered non-self pairs, the simple-graph edge count used for
    /// network density.
    pub fn unique_edge_count(&self) -> usize {
        let mut pairs: HashSet<(&str, &str)> = HashSet::new();
        for citation in &self.citations {
            if !citation.is_self_citation() {
                pairs.insert((&citation.from_source, &citation.to_source));
            }
        }
        pairs.len()
    }

    /// Clear the entire network.
    pub fn reset(&mut self) {
        self.sources.clear();
        self.citations.clear();
        self.outgoing.clear();
        self.incoming.clear();
    }

    pub(crate) fn set_authority_score(&mut self, name: &str, score: f64) {
        if let Some(source) = self.sources.get_mut(name) {
            source.authority_score = score;
        }
    }

    pub(crate) fn set_echo_fields(&mut self, name: &str, same: u64, different: u64, score: f64) {
        if let Some(source) = self.sources.get_mut(name) {
            source.same_bias_citations = same;
            source.different_bias_citations = different;
            source.echo_chamber_score = score;
        }
    }
}
