use crate::flow::{Edge, Node};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Breadth-first walk over the ancestors of a node, nearest first.
///
/// The reverse adjacency is built from `edges` on construction. Every id is enqueued at
/// most once, so self-loops and cycles terminate. The start node is marked visited up front
/// and is never yielded. Edge endpoints without a matching node are traversed through but
/// not yielded.
pub struct UpstreamWalk<'n, 'g> {
    nodes: AHashMap<&'n str, &'n Node>,
    predecessors: AHashMap<&'g str, Vec<&'g str>>,
    queue: VecDeque<&'g str>,
    visited: AHashSet<&'g str>,
}

impl<'n, 'g> UpstreamWalk<'n, 'g> {
    pub fn new(target_id: &str, nodes: &'n [Node], edges: &'g [Edge]) -> Self {
        let mut index: AHashMap<&'n str, &'n Node> = AHashMap::with_capacity(nodes.len());
        for node in nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }

        let mut predecessors: AHashMap<&'g str, Vec<&'g str>> = AHashMap::new();
        for edge in edges {
            predecessors
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        let mut queue = VecDeque::new();
        let mut visited = AHashSet::new();
        if let Some((&start, direct)) = predecessors.get_key_value(target_id) {
            visited.insert(start);
            for &source in direct {
                if visited.insert(source) {
                    queue.push_back(source);
                }
            }
        }

        Self {
            nodes: index,
            predecessors,
            queue,
            visited,
        }
    }
}

impl<'n> Iterator for UpstreamWalk<'n, '_> {
    type Item = &'n Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            if let Some(sources) = self.predecessors.get(id) {
                for &source in sources {
                    if self.visited.insert(source) {
                        self.queue.push_back(source);
                    }
                }
            }
            if let Some(&node) = self.nodes.get(id) {
                return Some(node);
            }
        }
        None
    }
}
