//! Vertex records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{GraphId, Value};

/// A vertex record addressed by a composite id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Composite identifier for this vertex.
    pub id: GraphId,
    /// Properties stored on this vertex.
    pub properties: HashMap<String, Value>,
}

impl Vertex {
    /// Create a new vertex with no properties.
    #[must_use]
    pub fn new(id: GraphId) -> Self {
        Self { id, properties: HashMap::new() }
    }

    /// Create a new vertex carrying the given property payload.
    #[must_use]
    pub fn with_properties(id: GraphId, properties: HashMap<String, Value>) -> Self {
        Self { id, properties }
    }

    /// Add a property to this vertex.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabelId;

    fn vid(local: u64) -> GraphId {
        GraphId::compose(LabelId::new(1), local).unwrap()
    }

    #[test]
    fn vertex_builder() {
        let vertex = Vertex::new(vid(1)).with_property("name", "alice").with_property("age", 30i64);

        assert_eq!(vertex.id, vid(1));
        assert_eq!(vertex.properties.get("name"), Some(&Value::String("alice".to_owned())));
        assert_eq!(vertex.properties.get("age"), Some(&Value::Int(30)));
    }

    #[test]
    fn with_properties_takes_payload_as_is() {
        let mut payload = HashMap::new();
        payload.insert("weight".to_owned(), Value::Float(0.5));

        let vertex = Vertex::with_properties(vid(2), payload.clone());
        assert_eq!(vertex.properties, payload);
    }
}
