use super::SmartDefaults;
use super::walk::UpstreamWalk;
use crate::flow::{Edge, Node};
use itertools::Itertools;
use std::cmp::Reverse;
use tracing::debug;

impl SmartDefaults<'_> {
    /// Finds the extractor a node should read from.
    ///
    /// Searches upstream breadth-first, so the extractor with the fewest hops wins and ties
    /// go to whichever predecessor was enqueued first. When no extractor is reachable (or
    /// `target_id` is not in `nodes`), falls back to the most recently created extractor
    /// anywhere in the graph. Returns `None` only when the graph has no extractor at all.
    pub fn find_nearest_extractor<'n>(
        &self,
        target_id: &str,
        nodes: &'n [Node],
        edges: &[Edge],
    ) -> Option<&'n Node> {
        if let Some(upstream) = UpstreamWalk::new(target_id, nodes, edges)
            .find(|node| self.catalog.is_extraction(&node.agent_id))
        {
            debug!(target_id, extractor = %upstream.id, "nearest upstream extractor");
            return Some(upstream);
        }

        let fallback = self
            .extractors(nodes)
            .sorted_by_key(|node| Reverse(node.sequence))
            .next();
        if let Some(node) = fallback {
            debug!(target_id, extractor = %node.id, "no connected extractor, using most recent");
        }
        fallback
    }

    /// Whether any extraction agent is reachable upstream of `target_id` by edges alone.
    pub fn has_extractor_ancestor(&self, target_id: &str, nodes: &[Node], edges: &[Edge]) -> bool {
        UpstreamWalk::new(target_id, nodes, edges)
            .any(|node| self.catalog.is_extraction(&node.agent_id))
    }

    /// Every extraction-agent node in the graph, in node order.
    pub fn extractors<'n>(&self, nodes: &'n [Node]) -> impl Iterator<Item = &'n Node> {
        nodes
            .iter()
            .filter(|node| self.catalog.is_extraction(&node.agent_id))
    }
}
