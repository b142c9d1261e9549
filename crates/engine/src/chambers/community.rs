//! Greedy modularity community detection
//!
//! Agglomerative variant: every participating source starts as its own
//! community, and the pair of communities whose merge yields the largest
//! modularity gain is merged until no strictly positive gain remains. The
//! citation multigraph is projected to an undirected weighted graph first
//! (pair weight = citation count summed over both directions, self-citations
//! dropped).
//!
//! Determinism: initial community ids follow ascending source-name order, the
//! candidate scan walks pairs in ascending (id, id) order, and only a strictly
//! larger gain displaces the incumbent, so the smallest pair wins ties.

use crate::graph::CitationGraph;
use std::collections::{BTreeMap, HashMap};

/// Partition the participating sources into communities.
///
/// Returns member-name lists, each sorted ascending, ordered by their
/// smallest member. Sources with no citations at all are absent; sources
/// whose only citations are self-citations come back as singletons.
pub fn detect_communities(graph: &CitationGraph) -> Vec<Vec<String>> {
    let nodes: Vec<&str> = graph.participating_names().collect();
    if nodes.is_empty() {
        return Vec::new();
    }

    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect();

    // Undirected projection: weight per unordered pair.
    let mut pair_weights: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for citation in graph.citations() {
        if citation.is_self_citation() {
            continue;
        }
        if let (Some(&from), Some(&to)) = (
            index.get(citation.from_source.as_str()),
            index.get(citation.to_source.as_str()),
        ) {
            let key = (from.min(to), from.max(to));
            *pair_weights.entry(key).or_insert(0.0) += 1.0;
        }
    }

    let total_weight: f64 = pair_weights.values().sum();
    let mut membership: Vec<usize> = (0..nodes.len()).collect();

    if total_weight > 0.0 {
        // a_i: fraction of edge ends attached to community i.
        let mut community_ends: BTreeMap<usize, f64> = BTreeMap::new();
        for (&(left, right), &weight) in &pair_weights {
            *community_ends.entry(left).or_insert(0.0) += weight / (2.0 * total_weight);
            *community_ends.entry(right).or_insert(0.0) += weight / (2.0 * total_weight);
        }
        // Nodes touching only self-citations still form (unmergeable)
        // singleton communities.
        for id in 0..nodes.len() {
            community_ends.entry(id).or_insert(0.0);
        }

        // Inter-community weights; internal weight never influences a merge
        // gain, so merged-away mass is simply dropped.
        let mut between = pair_weights;

        loop {
            let mut best: Option<((usize, usize), f64)> = None;
            for (&pair, &weight) in &between {
                let ends_left = community_ends.get(&pair.0).copied().unwrap_or(0.0);
                let ends_right = community_ends.get(&pair.1).copied().unwrap_or(0.0);
                let gain = 2.0 * (weight / (2.0 * total_weight) - ends_left * ends_right);
                match best {
                    Some((_, best_gain)) if gain <= best_gain => {}
                    _ => best = Some((pair, gain)),
                }
            }

            let Some(((keep, absorb), gain)) = best else {
                break;
            };
            if gain <= 0.0 {
                break;
            }

            for community in membership.iter_mut() {
                if *community == absorb {
                    *community = keep;
                }
            }
            let absorbed_ends = community_ends.remove(&absorb).unwrap_or(0.0);
            *community_ends.entry(keep).or_insert(0.0) += absorbed_ends;

            let mut rewired: BTreeMap<(usize, usize), f64> = BTreeMap::new();
            for ((left, right), weight) in between {
                let left = if left == absorb { keep } else { left };
                let right = if right == absorb { keep } else { right };
                if left == right {
                    continue;
                }
                let key = (left.min(right), left.max(right));
                *rewired.entry(key).or_insert(0.0) += weight;
            }
            between = rewired;
        }
    }

    // Group members; BTreeMap keys the groups by smallest member id.
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (node, &community) in membership.iter().enumerate() {
        groups
            .entry(community)
            .or_default()
            .push(nodes[node].to_string());
    }
    groups.into_values().collect()
}
