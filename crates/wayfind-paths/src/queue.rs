use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Cost;
use crate::node::{Node, NodeId, NodeStatus};

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// priority first and, among equal priorities, the earliest insertion.
#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: Cost,
    seq: u64,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over arena nodes.
///
/// The queue owns the `Open → Closed` transition: [`insert`](Self::insert)
/// opens a node and [`pop`](Self::pop) closes it. Lowering the priority of an
/// open node pushes a second entry; the superseded one is skipped on pop, so
/// logically the queue always holds exactly the open nodes.
#[derive(Debug, Default)]
pub(crate) struct NodeQueue {
    heap: BinaryHeap<Entry>,
    seq: u64,
    open: usize,
}

impl NodeQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `id` with `priority` and mark it open.
    pub(crate) fn insert<E>(&mut self, nodes: &mut [Node<E>], id: NodeId, priority: Cost) {
        let node = &mut nodes[id];
        debug_assert_eq!(node.status, NodeStatus::Unexplored);
        node.status = NodeStatus::Open;
        node.priority = priority;
        self.open += 1;
        self.push(id, priority);
    }

    /// Move an open node to a new priority. Closed nodes are left alone.
    pub(crate) fn reprioritize<E>(&mut self, nodes: &mut [Node<E>], id: NodeId, priority: Cost) {
        let node = &mut nodes[id];
        if node.status != NodeStatus::Open {
            return;
        }
        node.priority = priority;
        self.push(id, priority);
    }

    /// Remove the open node with the smallest priority and mark it closed.
    pub(crate) fn pop<E>(&mut self, nodes: &mut [Node<E>]) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let node = &mut nodes[entry.id];
            // Skip stale entries.
            if node.status != NodeStatus::Open || node.priority.total_cmp(&entry.priority).is_ne() {
                continue;
            }
            node.status = NodeStatus::Closed;
            self.open -= 1;
            return Some(entry.id);
        }
        None
    }

    /// Number of open nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.open
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.open == 0
    }

    fn push(&mut self, id: NodeId, priority: Cost) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }
}
