//! Citation record between two registered sources

use super::BiasLabel;
use serde::{Deserialize, Serialize};

/// How a citation was observed by the extraction layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationType {
    /// A hyperlink in the citing article
    #[default]
    Hyperlink,

    /// A textual mention ("according to ...")
    Mention,

    /// Curated by hand
    Manual,
}

/// A single citation from one source to another.
///
/// `from_bias`/`to_bias` record the bias attribution at the moment the
/// citation was observed. Callers may supply them; when left unset the graph
/// store stamps the live source bias at insertion time. Either way the labels
/// are frozen afterwards, even if a source's bias is later corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Name of the citing source
    pub from_source: String,

    /// Name of the cited source
    pub to_source: String,

    /// Identifier of the citing article, if known
    pub from_article_id: Option<i64>,

    /// URL the citation points at, if known
    pub to_url: Option<String>,

    /// Free text surrounding the citation
    pub context: Option<String>,

    /// How the citation was observed
    pub citation_type: CitationType,

    /// Citing source's bias, frozen at citation time
    pub from_bias: Option<BiasLabel>,

    /// Cited source's bias, frozen at citation time
    pub to_bias: Option<BiasLabel>,
}

impl Citation {
    /// Create a citation with no article/url/context metadata.
    pub fn new(
        from_source: impl Into<String>,
        to_source: impl Into<String>,
        citation_type: CitationType,
    ) -> Self {
        Self {
            from_source: from_source.into(),
            to_source: to_source.into(),
            from_article_id: None,
            to_url: None,
            context: None,
            citation_type,
            from_bias: None,
            to_bias: None,
        }
    }

    /// Shorthand for a hyperlink citation.
    pub fn hyperlink(from_source: impl Into<String>, to_source: impl Into<String>) -> Self {
        Self::new(from_source, to_source, CitationType::Hyperlink)
    }

    /// Shorthand for a mention citation.
    pub fn mention(from_source: impl Into<String>, to_source: impl Into<String>) -> Self {
        Self::new(from_source, to_source, CitationType::Mention)
    }

    /// Attach the citing article id.
    pub fn with_article_id(mut self, article_id: i64) -> Self {
        self.from_article_id = Some(article_id);
        self
    }

    /// Attach the cited URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.to_url = Some(url.into());
        self
    }

    /// Attach the surrounding text.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Pre-set both frozen bias labels instead of letting the store stamp them.
    pub fn with_biases(mut self, from_bias: BiasLabel, to_bias: BiasLabel) -> Self {
        self.from_bias = Some(from_bias);
        self.to_bias = Some(to_bias);
        self
    }

    /// A source citing itself.
    pub fn is_self_citation(&self) -> bool {
        self.from_source == self.to_source
    }

    /// Whether the frozen labels differ. `None` until both labels are set.
    pub fn is_cross_bias(&self) -> Option<bool> {
        match (self.from_bias, self.to_bias) {
            (Some(from), Some(to)) => Some(from != to),
            _ => None,
        }
    }
}
