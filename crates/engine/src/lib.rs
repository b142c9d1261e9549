//! NewsGraph Engine
//!
//! Citation network engine for news sources:
//! - In-memory directed citation multigraph with running statistics
//! - PageRank-style authority scoring with dangling-mass redistribution
//! - Greedy-modularity echo chamber detection and insularity scoring
//! - Read-only reporting (summaries, rankings, cross-bias matrices)
//!
//! The engine is a synchronous library consumed in-process; transport and
//! persistence belong to the embedding host.
//!
//! ```
//! use newsgraph_engine::{BiasLabel, Citation, CitationNetwork};
//!
//! let mut network = CitationNetwork::new();
//! network.add_source("CNN", "cnn.com", BiasLabel::Left)?;
//! network.add_source("Fox News", "foxnews.com", BiasLabel::Right)?;
//! network.add_citation(Citation::hyperlink("CNN", "Fox News"))?;
//!
//! network.calculate_authority_scores();
//! let summary = network.get_network_summary();
//! assert_eq!(summary.total_citations, 1);
//! # Ok::<(), newsgraph_engine::EngineError>(())
//! ```

pub mod authority;
pub mod chambers;
pub mod demo;
pub mod graph;
pub mod network;
pub mod report;

// Re-export commonly used types
pub use authority::AuthorityScorer;
pub use chambers::{detect_communities, EchoChamberDetector};
pub use graph::CitationGraph;
pub use network::{CitationNetwork, SharedCitationNetwork};
pub use report::{
    CrossBiasReport, NetworkExport, NetworkReporter, NetworkSummary, RankedSource, SourceFilter,
    SourceSort,
};

pub use newsgraph_common::config::{
    AuthorityConfig, DetectionConfig, EngineConfig, ReportingConfig,
};
pub use newsgraph_common::errors::{EngineError, Result};
pub use newsgraph_common::models::{BiasLabel, Citation, CitationType, EchoChamber, Source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
