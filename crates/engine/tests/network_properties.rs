//! End-to-end properties of the citation network engine
//!
//! Exercises the public facade the way an embedding host would, checking the
//! numeric and structural guarantees the engine documents.

use newsgraph_engine::{
    BiasLabel, Citation, CitationNetwork, EngineError, SourceFilter, SourceSort,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn network(sources: &[(&str, BiasLabel)]) -> CitationNetwork {
    let mut network = CitationNetwork::new();
    for (name, bias) in sources {
        network
            .add_source(*name, format!("{}.example", name.to_lowercase()), *bias)
            .unwrap();
    }
    network
}

fn cite(network: &mut CitationNetwork, edges: &[(&str, &str)]) {
    for (from, to) in edges {
        network.add_citation(Citation::hyperlink(*from, *to)).unwrap();
    }
}

#[test]
fn authority_sums_to_one_over_cited_sources() {
    let mut network = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Center),
        ("C", BiasLabel::Right),
        ("Isolated", BiasLabel::Unknown),
    ]);
    cite(&mut network, &[("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")]);

    network.calculate_authority_scores();

    let sum: f64 = network
        .get_sources(&SourceFilter::default())
        .iter()
        .filter(|s| s.citations_made + s.citations_received > 0)
        .map(|s| s.authority_score)
        .sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn isolated_source_scores_zero_and_joins_no_chamber() {
    let mut network = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Left),
        ("C", BiasLabel::Left),
        ("Hermit", BiasLabel::Right),
    ]);
    cite(
        &mut network,
        &[("A", "B"), ("B", "C"), ("C", "A"), ("B", "A"), ("C", "B"), ("A", "C")],
    );

    network.calculate_authority_scores();
    assert_eq!(network.source("Hermit").unwrap().authority_score, 0.0);

    for chamber in network.detect_echo_chambers(Some(1)) {
        assert!(!chamber.contains("Hermit"));
    }
}

#[test]
fn self_citations_change_no_bias_counter_and_no_insularity() {
    let mut plain = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Left),
        ("C", BiasLabel::Left),
    ]);
    cite(
        &mut plain,
        &[("A", "B"), ("B", "C"), ("C", "A"), ("B", "A"), ("C", "B"), ("A", "C")],
    );

    let mut loopy = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Left),
        ("C", BiasLabel::Left),
    ]);
    cite(
        &mut loopy,
        &[("A", "B"), ("B", "C"), ("C", "A"), ("B", "A"), ("C", "B"), ("A", "C")],
    );
    cite(&mut loopy, &[("A", "A"), ("A", "A")]);

    loopy.calculate_echo_chamber_scores();
    let a = loopy.source("A").unwrap();
    assert_eq!(a.same_bias_citations, 2);
    assert_eq!(a.different_bias_citations, 0);

    let plain_chambers = plain.detect_echo_chambers(Some(3));
    let loopy_chambers = loopy.detect_echo_chambers(Some(3));
    assert_eq!(plain_chambers.len(), 1);
    assert_eq!(loopy_chambers.len(), 1);
    assert_eq!(
        plain_chambers[0].internal_citations,
        loopy_chambers[0].internal_citations
    );
    assert_eq!(
        plain_chambers[0].insularity_score,
        loopy_chambers[0].insularity_score
    );
}

#[test]
fn authority_scoring_is_idempotent() {
    let mut network = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Center),
        ("C", BiasLabel::Right),
        ("D", BiasLabel::Unknown),
    ]);
    cite(
        &mut network,
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")],
    );

    network.calculate_authority_scores();
    let first: Vec<f64> = network
        .get_sources(&SourceFilter::default().sort_by(SourceSort::Name))
        .iter()
        .map(|s| s.authority_score)
        .collect();

    network.calculate_authority_scores();
    let second: Vec<f64> = network
        .get_sources(&SourceFilter::default().sort_by(SourceSort::Name))
        .iter()
        .map(|s| s.authority_score)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn disjoint_cliques_form_two_fully_insular_chambers() {
    let mut network = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Left),
        ("C", BiasLabel::Left),
        ("D", BiasLabel::Left),
        ("W", BiasLabel::Right),
        ("X", BiasLabel::Right),
        ("Y", BiasLabel::Right),
        ("Z", BiasLabel::Right),
    ]);
    for group in [["A", "B", "C", "D"], ["W", "X", "Y", "Z"]] {
        for from in group {
            for to in group {
                if from != to {
                    network.add_citation(Citation::hyperlink(from, to)).unwrap();
                }
            }
        }
    }

    let chambers = network.detect_echo_chambers(None);
    assert_eq!(chambers.len(), 2);
    for chamber in &chambers {
        assert_eq!(chamber.len(), 4);
        assert_eq!(chamber.insularity_score, 1.0);
    }

    let biases: Vec<BiasLabel> = chambers.iter().map(|c| c.dominant_bias).collect();
    assert!(biases.contains(&BiasLabel::Left));
    assert!(biases.contains(&BiasLabel::Right));
}

#[test]
fn bias_scenario_counts_and_matrix() {
    // A (left), B (left), C (right); A->B same, A->C cross, B->A same.
    let mut network = network(&[
        ("A", BiasLabel::Left),
        ("B", BiasLabel::Left),
        ("C", BiasLabel::Right),
    ]);
    cite(&mut network, &[("A", "B"), ("A", "C"), ("B", "A")]);

    network.calculate_echo_chamber_scores();
    let a = network.source("A").unwrap();
    assert_eq!(a.same_bias_citations, 1);
    assert_eq!(a.different_bias_citations, 1);
    assert!((a.echo_chamber_score - 0.5).abs() < 1e-12);

    let report = network.get_cross_bias_matrix();
    assert_eq!(report.matrix[&BiasLabel::Left][&BiasLabel::Left], 2);
    assert_eq!(report.matrix[&BiasLabel::Left][&BiasLabel::Right], 1);
    assert_eq!(report.total_same_bias, 2);
    assert_eq!(report.total_cross_bias, 1);
}

#[test]
fn unknown_endpoint_is_rejected_without_partial_mutation() {
    let mut network = network(&[("A", BiasLabel::Left)]);

    let err = network
        .add_citation(Citation::hyperlink("A", "Never Registered"))
        .unwrap_err();
    assert!(matches!(err, EngineError::UnknownSource { .. }));
    assert!(err.is_recoverable());

    let a = network.source("A").unwrap();
    assert_eq!(a.citations_made, 0);
    assert_eq!(network.get_network_summary().total_citations, 0);

    // The caller can recover by registering and retrying.
    network
        .add_source("Never Registered", "nr.example", BiasLabel::Unknown)
        .unwrap();
    network
        .add_citation(Citation::hyperlink("A", "Never Registered"))
        .unwrap();
    assert_eq!(network.get_network_summary().total_citations, 1);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut network = network(&[("A", BiasLabel::Left)]);
    let err = network.add_source("A", "elsewhere.example", BiasLabel::Right);
    assert!(matches!(err, Err(EngineError::DuplicateSource { .. })));
    assert_eq!(network.source("A").unwrap().political_bias, BiasLabel::Left);
}

#[test]
fn randomized_graphs_keep_engine_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..10 {
        let source_count = rng.gen_range(5..40);
        let names: Vec<String> = (0..source_count).map(|i| format!("S{:02}", i)).collect();

        let mut network = CitationNetwork::new();
        for name in &names {
            let bias = BiasLabel::ALL[rng.gen_range(0..BiasLabel::ALL.len())];
            network.add_source(name.clone(), "", bias).unwrap();
        }

        let citation_count = rng.gen_range(0..200);
        for _ in 0..citation_count {
            let from = &names[rng.gen_range(0..names.len())];
            let to = &names[rng.gen_range(0..names.len())];
            network
                .add_citation(Citation::hyperlink(from.clone(), to.clone()))
                .unwrap();
        }

        network.calculate_authority_scores();
        network.calculate_echo_chamber_scores();

        let sources = network.get_sources(&SourceFilter::default());
        let participating: Vec<_> = sources
            .iter()
            .filter(|s| s.citations_made + s.citations_received > 0)
            .collect();

        if !participating.is_empty() {
            let sum: f64 = participating.iter().map(|s| s.authority_score).sum();
            assert!(
                (sum - 1.0).abs() < 1e-6,
                "round {}: authority sum {}",
                round,
                sum
            );
        }
        for source in &sources {
            assert!((0.0..=1.0).contains(&source.echo_chamber_score));
            if source.citations_made + source.citations_received == 0 {
                assert_eq!(source.authority_score, 0.0);
            }
        }

        let min_size = rng.gen_range(1..5);
        for chamber in network.detect_echo_chambers(Some(min_size)) {
            assert!(chamber.len() >= min_size);
            assert!((0.0..=1.0).contains(&chamber.insularity_score));
            for member in &chamber.sources {
                let source = network.source(member).expect("member registered");
                assert!(source.citations_made + source.citations_received > 0);
            }
        }
    }
}
