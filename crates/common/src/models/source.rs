//! News source model and political bias labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Political bias label attached to a source.
///
/// The declaration order is load-bearing: ties (e.g. the dominant bias of an
/// echo chamber) are broken by picking the variant that appears first here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BiasLabel {
    Left,
    LeftLeaning,
    Center,
    RightLeaning,
    Right,
    #[default]
    Unknown,
}

impl BiasLabel {
    /// All labels in tie-break order.
    pub const ALL: [BiasLabel; 6] = [
        BiasLabel::Left,
        BiasLabel::LeftLeaning,
        BiasLabel::Center,
        BiasLabel::RightLeaning,
        BiasLabel::Right,
        BiasLabel::Unknown,
    ];

    /// Canonical string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLabel::Left => "left",
            BiasLabel::LeftLeaning => "left_leaning",
            BiasLabel::Center => "center",
            BiasLabel::RightLeaning => "right_leaning",
            BiasLabel::Right => "right",
            BiasLabel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiasLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(BiasLabel::Left),
            "left_leaning" => Ok(BiasLabel::LeftLeaning),
            "center" => Ok(BiasLabel::Center),
            "right_leaning" => Ok(BiasLabel::RightLeaning),
            "right" => Ok(BiasLabel::Right),
            "unknown" => Ok(BiasLabel::Unknown),
            other => Err(format!("unrecognized bias label: {}", other)),
        }
    }
}

/// A registered news source and its network statistics.
///
/// The identity fields (`name`, `domain`, `political_bias`) are set at
/// registration. The count fields are maintained by the graph store as
/// citations arrive; the score fields are written by the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Unique, case-sensitive source name
    pub name: String,

    /// Primary web domain
    pub domain: String,

    /// Current bias attribution (may be corrected after registration)
    pub political_bias: BiasLabel,

    /// Outgoing citation count, including self-citations
    pub citations_made: u64,

    /// Incoming citation count, including self-citations
    pub citations_received: u64,

    /// PageRank-style relative importance, 0.0 until computed
    pub authority_score: f64,

    /// Fraction of outgoing citations staying within the same bias
    pub echo_chamber_score: f64,

    /// Outgoing citations whose frozen labels matched
    pub same_bias_citations: u64,

    /// Outgoing citations whose frozen labels differed
    pub different_bias_citations: u64,
}

impl Source {
    /// Create a source with zeroed statistics.
    pub fn new(name: impl Into<String>, domain: impl Into<String>, bias: BiasLabel) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            political_bias: bias,
            citations_made: 0,
            citations_received: 0,
            authority_score: 0.0,
            echo_chamber_score: 0.0,
            same_bias_citations: 0,
            different_bias_citations: 0,
        }
    }

    /// Whether this source touches any citation at all.
    pub fn is_participating(&self) -> bool {
        self.citations_made > 0 || self.citations_received > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_tie_break_order() {
        // Ord follows declaration order, so min() picks the earlier label.
        assert!(BiasLabel::Left < BiasLabel::LeftLeaning);
        assert!(BiasLabel::Center < BiasLabel::Right);
        assert!(BiasLabel::Right < BiasLabel::Unknown);
    }

    #[test]
    fn test_bias_round_trip() {
        for label in BiasLabel::ALL {
            assert_eq!(label.as_str().parse::<BiasLabel>(), Ok(label));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BiasLabel::LeftLeaning).unwrap();
        assert_eq!(json, "\"left_leaning\"");
    }

    #[test]
    fn test_new_source_is_isolated() {
        let source = Source::new("Reuters", "reuters.com", BiasLabel::Center);
        assert!(!source.is_participating());
        assert_eq!(source.authority_score, 0.0);
    }
}
