//! Task queues backing the schedulers.
//!
//! Both queues hold *indices* into the caller's task table rather than
//! task references, so the scheduler keeps exclusive ownership of the
//! tasks while a queue is alive. Two FIFO forms are provided: a linear
//! owned chain that is built once and drained front-to-back (FCFS), and
//! a sentinel-guarded circular arena that additionally supports
//! re-enqueueing a partially executed task at the tail (round-robin).

use crate::error::SchedError;
use crate::task::TaskId;

/// Arena slot of the sentinel node.
const SENTINEL: usize = 0;

/// What a circular-queue node carries.
///
/// The sentinel marks the boundary between tail and head; it is the
/// only node without a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// The boundary node; holds no task.
    Sentinel,
    /// A live node holding a task-table index.
    Task(usize),
}

// ── Linear form ──────────────────────────────────────────────────────

/// Singly linked FIFO over task indices, consumed once.
///
/// Built from a task table in array order and drained front-to-back;
/// never re-populated. Dropping the queue releases every remaining
/// node.
#[derive(Debug)]
pub struct LinearQueue {
    head: Option<Box<LinearNode>>,
    len: usize,
}

#[derive(Debug)]
struct LinearNode {
    index: usize,
    next: Option<Box<LinearNode>>,
}

impl LinearQueue {
    /// Build a queue holding indices `0..count` in order.
    ///
    /// Fails when `count` is zero; an empty task set never reaches the
    /// scheduler loop.
    pub fn build(count: usize) -> Result<Self, SchedError> {
        if count == 0 {
            return Err(SchedError::EmptyTaskSet);
        }
        let mut head = None;
        for index in (0..count).rev() {
            head = Some(Box::new(LinearNode { index, next: head }));
        }
        log::trace!("built linear queue with {count} nodes");
        Ok(LinearQueue { head, len: count })
    }

    /// True once every node has been popped.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Task index at the front, without removing it.
    pub fn peek_front(&self) -> Option<usize> {
        self.head.as_ref().map(|node| node.index)
    }

    /// Remove and release the front node. No-op when already empty.
    pub fn pop_front(&mut self) {
        if let Some(node) = self.head.take() {
            self.head = node.next;
            self.len -= 1;
        }
    }
}

impl Drop for LinearQueue {
    fn drop(&mut self) {
        // Unlink iteratively; the default drop would recurse once per
        // remaining node.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

// ── Circular, sentinel-guarded form ──────────────────────────────────

/// Circular FIFO over task indices, guarded by a sentinel node.
///
/// Nodes live in an arena; slot 0 is the sentinel and the tail node
/// links back to it. The queue is empty iff the sentinel's `next` is
/// `None` — popping the last live node collapses the sentinel link
/// instead of leaving a self-reference. `push_back` appends just before
/// the sentinel while iteration is in progress, which is what lets
/// round-robin re-enqueue the task it is currently running.
#[derive(Debug)]
pub struct CircularQueue {
    nodes: Vec<Node>,
    /// Retired arena slots, reused by later pushes.
    free: Vec<usize>,
    task_count: usize,
    len: usize,
}

#[derive(Debug)]
struct Node {
    slot: Slot,
    next: Option<usize>,
}

impl CircularQueue {
    /// Build a queue holding indices `0..count` in order, with the
    /// final node linked back to the sentinel.
    pub fn build(count: usize) -> Result<Self, SchedError> {
        if count == 0 {
            return Err(SchedError::EmptyTaskSet);
        }
        let mut nodes = Vec::with_capacity(count + 1);
        nodes.push(Node {
            slot: Slot::Sentinel,
            next: Some(1),
        });
        for index in 0..count {
            let next = if index + 1 == count { SENTINEL } else { index + 2 };
            nodes.push(Node {
                slot: Slot::Task(index),
                next: Some(next),
            });
        }
        log::trace!("built circular queue with {count} nodes");
        Ok(CircularQueue {
            nodes,
            free: Vec::new(),
            task_count: count,
            len: count,
        })
    }

    /// True iff the sentinel's link is collapsed.
    pub fn is_empty(&self) -> bool {
        self.nodes[SENTINEL].next.is_none()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Task index at the front, without removing it.
    pub fn peek_front(&self) -> Option<usize> {
        let front = self.nodes[SENTINEL].next?;
        match self.nodes[front].slot {
            Slot::Task(index) => Some(index),
            Slot::Sentinel => None,
        }
    }

    /// Remove and retire the front node. No-op when already empty.
    ///
    /// Popping the only live node resets the sentinel's link to `None`
    /// rather than leaving it pointing at itself.
    pub fn pop_front(&mut self) {
        let Some(front) = self.nodes[SENTINEL].next else {
            return;
        };
        let after = self.nodes[front].next;
        self.nodes[SENTINEL].next = match after {
            // The popped node was the tail: collapse to empty.
            Some(SENTINEL) | None => None,
            other => other,
        };
        self.retire(front);
        self.len -= 1;
    }

    /// Append `index` just before the sentinel, closing the circular
    /// link from the new node back to it.
    ///
    /// Walks from the current front to the tail, so each call costs
    /// O(len). Rejects indices outside the task table the queue was
    /// built against.
    pub fn push_back(&mut self, index: usize) -> Result<(), SchedError> {
        if index >= self.task_count {
            return Err(SchedError::UnknownTask {
                id: TaskId(index as u32),
            });
        }
        let node = self.allocate(Node {
            slot: Slot::Task(index),
            next: Some(SENTINEL),
        });
        match self.nodes[SENTINEL].next {
            None => {
                // First node of an empty queue.
                self.nodes[SENTINEL].next = Some(node);
            }
            Some(front) => {
                let mut current = front;
                loop {
                    match self.nodes[current].next {
                        Some(next) if next != SENTINEL => current = next,
                        _ => break,
                    }
                }
                self.nodes[current].next = Some(node);
            }
        }
        self.len += 1;
        Ok(())
    }

    fn allocate(&mut self, node: Node) -> usize {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    fn retire(&mut self, slot: usize) {
        // Contents are dead until the slot is reused.
        self.nodes[slot].next = None;
        self.free.push(slot);
    }
}
