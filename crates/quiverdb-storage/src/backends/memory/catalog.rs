//! In-memory catalog backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use quiverdb_core::types::{LABEL_ID_MAX, LOCAL_ID_MAX, LOCAL_ID_MIN};
use quiverdb_core::{GraphName, GraphOid, LabelId, LabelKind, LabelName, SequenceId};

use crate::catalog::{
    AllocationError, Catalog, CatalogError, GraphEntry, LabelEntry, DEFAULT_EDGE_LABEL,
    DEFAULT_VERTEX_LABEL,
};

/// One graph and its labels.
#[derive(Debug)]
struct GraphRecord {
    entry: GraphEntry,
    labels: HashMap<String, LabelEntry>,
    /// The next label id to assign within this graph.
    next_label_id: u32,
}

/// Mutable catalog state behind one lock.
#[derive(Debug)]
struct CatalogState {
    graphs: HashMap<String, GraphRecord>,
    /// The next graph oid to assign.
    next_graph_oid: u32,
    /// Sequence cells, indexed by `SequenceId - 1`.
    sequences: Vec<AtomicU64>,
}

impl CatalogState {
    fn graph_by_oid(&self, oid: GraphOid) -> Result<&GraphRecord, CatalogError> {
        self.graphs.values().find(|g| g.entry.oid == oid).ok_or(CatalogError::UnknownGraph(oid))
    }

    fn graph_by_oid_mut(&mut self, oid: GraphOid) -> Result<&mut GraphRecord, CatalogError> {
        self.graphs
            .values_mut()
            .find(|g| g.entry.oid == oid)
            .ok_or(CatalogError::UnknownGraph(oid))
    }

    fn add_label(
        &mut self,
        graph: GraphOid,
        name: &LabelName,
        kind: LabelKind,
    ) -> Result<LabelEntry, CatalogError> {
        {
            let record = self.graph_by_oid(graph)?;
            if record.labels.contains_key(name.as_str()) {
                return Err(CatalogError::LabelAlreadyExists { graph, name: name.clone() });
            }
            if record.next_label_id > LABEL_ID_MAX {
                return Err(CatalogError::LabelLimitReached(graph));
            }
        }

        self.sequences.push(AtomicU64::new(LOCAL_ID_MIN));
        let sequence = SequenceId::new(self.sequences.len() as u32);

        let record = self.graph_by_oid_mut(graph)?;
        let entry = LabelEntry {
            name: name.clone(),
            id: LabelId::new(record.next_label_id),
            kind,
            sequence,
        };
        record.next_label_id += 1;
        record.labels.insert(name.as_str().to_owned(), entry.clone());
        Ok(entry)
    }
}

/// In-memory [`Catalog`] implementation.
///
/// Graph oids, label ids, and sequence handles are assigned from 1 (0 is
/// reserved for "no id"). The name tables sit behind a read-write lock and
/// sequence counters are atomic, so concurrent generation calls never
/// observe the same local id.
#[derive(Debug)]
pub struct MemoryCatalog {
    state: RwLock<CatalogState>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                graphs: HashMap::new(),
                next_graph_oid: 1,
                sequences: Vec::new(),
            }),
        }
    }

    /// Number of graphs in the catalog.
    ///
    /// A poisoned lock is read through rather than reported as empty.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.state.read().unwrap_or_else(PoisonError::into_inner).graphs.len()
    }

    /// Number of labels in the given graph, default labels included.
    ///
    /// Returns 0 for an unknown graph.
    #[must_use]
    pub fn label_count(&self, graph: GraphOid) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.graph_by_oid(graph).map(|g| g.labels.len()).unwrap_or(0)
    }

    /// Reset a sequence counter to a new value.
    ///
    /// This is primarily used for testing exhaustion behavior.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::UnknownSequence`] for a stale handle.
    pub fn reset_sequence(&self, sequence: SequenceId, value: u64) -> Result<(), AllocationError> {
        let state = self.read_for_allocation()?;
        let cell = sequence_cell(&state, sequence)?;
        cell.store(value, Ordering::Relaxed);
        Ok(())
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, CatalogState>, CatalogError> {
        self.state.read().map_err(|_| CatalogError::Internal("catalog lock poisoned".into()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, CatalogState>, CatalogError> {
        self.state.write().map_err(|_| CatalogError::Internal("catalog lock poisoned".into()))
    }

    fn read_for_allocation(&self) -> Result<RwLockReadGuard<'_, CatalogState>, AllocationError> {
        self.state.read().map_err(|_| AllocationError::Internal("catalog lock poisoned".into()))
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up the atomic cell behind a sequence handle.
fn sequence_cell<'a>(
    state: &'a CatalogState,
    sequence: SequenceId,
) -> Result<&'a AtomicU64, AllocationError> {
    let index = sequence.as_u32() as usize;
    if index == 0 || index > state.sequences.len() {
        return Err(AllocationError::UnknownSequence(sequence));
    }
    Ok(&state.sequences[index - 1])
}

impl Catalog for MemoryCatalog {
    fn graph_exists(&self, name: &GraphName) -> Result<bool, CatalogError> {
        Ok(self.read_state()?.graphs.contains_key(name.as_str()))
    }

    fn create_graph(&self, name: &GraphName) -> Result<GraphEntry, CatalogError> {
        let mut state = self.write_state()?;
        if state.graphs.contains_key(name.as_str()) {
            return Err(CatalogError::GraphAlreadyExists(name.clone()));
        }

        let oid = GraphOid::new(state.next_graph_oid);
        state.next_graph_oid += 1;
        let entry = GraphEntry { name: name.clone(), oid };
        state.graphs.insert(
            name.as_str().to_owned(),
            GraphRecord { entry: entry.clone(), labels: HashMap::new(), next_label_id: 1 },
        );

        // Every graph is born with its default labels.
        state.add_label(oid, &LabelName::new(DEFAULT_VERTEX_LABEL), LabelKind::Vertex)?;
        state.add_label(oid, &LabelName::new(DEFAULT_EDGE_LABEL), LabelKind::Edge)?;
        Ok(entry)
    }

    fn resolve_graph(&self, name: &GraphName) -> Result<GraphEntry, CatalogError> {
        self.read_state()?
            .graphs
            .get(name.as_str())
            .map(|g| g.entry.clone())
            .ok_or_else(|| CatalogError::GraphNotFound(name.clone()))
    }

    fn label_exists(&self, graph: GraphOid, name: &LabelName) -> Result<bool, CatalogError> {
        Ok(self.read_state()?.graph_by_oid(graph)?.labels.contains_key(name.as_str()))
    }

    fn create_label(
        &self,
        graph: GraphOid,
        name: &LabelName,
        kind: LabelKind,
    ) -> Result<LabelEntry, CatalogError> {
        self.write_state()?.add_label(graph, name, kind)
    }

    fn resolve_label(
        &self,
        graph: GraphOid,
        name: &LabelName,
        kind: LabelKind,
    ) -> Result<LabelEntry, CatalogError> {
        let state = self.read_state()?;
        let record = state.graph_by_oid(graph)?;
        let entry = record
            .labels
            .get(name.as_str())
            .ok_or_else(|| CatalogError::LabelNotFound { graph, name: name.clone() })?;
        if entry.kind != kind {
            return Err(CatalogError::LabelKindMismatch {
                name: name.clone(),
                expected: kind,
                actual: entry.kind,
            });
        }
        Ok(entry.clone())
    }

    fn next_local_id(&self, sequence: SequenceId) -> Result<u64, AllocationError> {
        let state = self.read_for_allocation()?;
        let cell = sequence_cell(&state, sequence)?;
        let id = cell.fetch_add(1, Ordering::Relaxed);
        if id > LOCAL_ID_MAX {
            return Err(AllocationError::Exhausted(sequence));
        }
        Ok(id)
    }
}
