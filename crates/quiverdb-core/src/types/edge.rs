//! Edge records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{GraphId, Value};

/// An edge record connecting two vertices.
///
/// Edges carry a direction (`start` to `end`). Topology generation treats
/// them as undirected pairs; the direction records creation order only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Composite identifier for this edge.
    pub id: GraphId,
    /// The vertex this edge starts at.
    pub start: GraphId,
    /// The vertex this edge ends at.
    pub end: GraphId,
    /// Properties stored on this edge.
    pub properties: HashMap<String, Value>,
}

impl Edge {
    /// Create a new edge with no properties.
    #[must_use]
    pub fn new(id: GraphId, start: GraphId, end: GraphId) -> Self {
        Self { id, start, end, properties: HashMap::new() }
    }

    /// Create a new edge carrying the given property payload.
    #[must_use]
    pub fn with_properties(
        id: GraphId,
        start: GraphId,
        end: GraphId,
        properties: HashMap<String, Value>,
    ) -> Self {
        Self { id, start, end, properties }
    }

    /// Add a property to this edge.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if this edge connects the two vertices, in either direction.
    #[must_use]
    pub fn connects(&self, a: GraphId, b: GraphId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabelId;

    fn vid(local: u64) -> GraphId {
        GraphId::compose(LabelId::new(1), local).unwrap()
    }

    fn eid(local: u64) -> GraphId {
        GraphId::compose(LabelId::new(2), local).unwrap()
    }

    #[test]
    fn edge_builder() {
        let edge = Edge::new(eid(1), vid(1), vid(2)).with_property("since", 2020i64);

        assert_eq!(edge.start, vid(1));
        assert_eq!(edge.end, vid(2));
        assert_eq!(edge.properties.get("since"), Some(&Value::Int(2020)));
    }

    #[test]
    fn connects_ignores_direction() {
        let edge = Edge::new(eid(1), vid(1), vid(2));
        assert!(edge.connects(vid(1), vid(2)));
        assert!(edge.connects(vid(2), vid(1)));
        assert!(!edge.connects(vid(1), vid(3)));
    }

    #[test]
    fn loops_are_detectable() {
        assert!(Edge::new(eid(1), vid(1), vid(1)).is_loop());
        assert!(!Edge::new(eid(2), vid(1), vid(2)).is_loop());
    }
}
