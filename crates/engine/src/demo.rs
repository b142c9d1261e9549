//! Sample network for documentation and smoke tests

use crate::network::CitationNetwork;
use newsgraph_common::errors::Result;
use newsgraph_common::models::{BiasLabel, Citation, CitationType};

/// Build a small demo network of well-known outlets with plausible citation
/// patterns: a left-leaning cluster, a right-leaning cluster, and wire
/// services citing across both.
pub fn demo_network() -> Result<CitationNetwork> {
    let mut network = CitationNetwork::new();

    let sources = [
        ("CNN", "cnn.com", BiasLabel::Left),
        ("Fox News", "foxnews.com", BiasLabel::Right),
        ("New York Times", "nytimes.com", BiasLabel::LeftLeaning),
        ("Wall Street Journal", "wsj.com", BiasLabel::RightLeaning),
        ("Reuters", "reuters.com", BiasLabel::Center),
        ("MSNBC", "msnbc.com", BiasLabel::Left),
        ("Breitbart", "breitbart.com", BiasLabel::Right),
        ("NPR", "npr.org", BiasLabel::Center),
    ];
    for (name, domain, bias) in sources {
        network.add_source(name, domain, bias)?;
    }

    let citations = [
        ("CNN", "MSNBC", CitationType::Hyperlink),
        ("CNN", "New York Times", CitationType::Mention),
        ("MSNBC", "CNN", CitationType::Hyperlink),
        ("New York Times", "CNN", CitationType::Mention),
        ("New York Times", "NPR", CitationType::Manual),
        ("Fox News", "Breitbart", CitationType::Hyperlink),
        ("Fox News", "Wall Street Journal", CitationType::Mention),
        ("Breitbart", "Fox News", CitationType::Hyperlink),
        ("Wall Street Journal", "Fox News", CitationType::Manual),
        ("Reuters", "CNN", CitationType::Mention),
        ("Reuters", "Fox News", CitationType::Manual),
        ("NPR", "New York Times", CitationType::Mention),
        ("NPR", "Wall Street Journal", CitationType::Manual),
    ];
    for (from, to, kind) in citations {
        network.add_citation(Citation::new(from, to, kind))?;
    }

    Ok(network)
}
