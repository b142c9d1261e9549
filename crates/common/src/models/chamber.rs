//! Detected echo chamber

use super::BiasLabel;
use serde::{Deserialize, Serialize};

/// A community of sources whose citations stay disproportionately internal.
///
/// Produced fresh by every detection run; `chamber_id` is stable only within
/// one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoChamber {
    /// Identifier within this detection run
    pub chamber_id: usize,

    /// Member source names, sorted ascending
    pub sources: Vec<String>,

    /// Mode of the members' live bias labels
    pub dominant_bias: BiasLabel,

    /// Citations with both endpoints inside the chamber
    pub internal_citations: u64,

    /// Citations with exactly one endpoint inside the chamber
    pub external_citations: u64,

    /// internal / max(1, internal + external), in [0, 1]
    pub insularity_score: f64,

    /// Mean authority score of the members
    pub avg_authority: f64,
}

impl EchoChamber {
    /// Number of member sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Whether the named source belongs to this chamber.
    pub fn contains(&self, name: &str) -> bool {
        self.sources.iter().any(|s| s == name)
    }
}
