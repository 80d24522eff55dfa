use std::sync::Arc;
use tezcache_domain::{DomainError, UpstreamNode};

/// Fixed set of upstream nodes with memoryless uniform selection.
#[derive(Debug, Clone)]
pub struct NodePool {
    nodes: Arc<[UpstreamNode]>,
}

impl NodePool {
    pub fn new(nodes: Vec<UpstreamNode>) -> Result<Self, DomainError> {
        if nodes.is_empty() {
            return Err(DomainError::EmptyNodePool);
        }
        Ok(Self {
            nodes: Arc::from(nodes),
        })
    }

    /// Picks one node uniformly at random. Never blocks.
    #[inline]
    pub fn pick(&self) -> &UpstreamNode {
        &self.nodes[fastrand::usize(..self.nodes.len())]
    }

    pub fn nodes(&self) -> &[UpstreamNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
