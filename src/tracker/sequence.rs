//! Arena-backed doubly-linked sequence
//!
//! Nodes live in a slot table and point at their neighbours by slot index, so
//! splicing a node in or out is an index rewrite. Freed slots are recycled
//! through a free list and carry a generation counter, which makes a stale
//! [`Position`] handle harmless: it simply stops resolving.

use std::cmp::Ordering;
use std::iter::FusedIterator;

/// Handle to one node of an [`OrderedSequence`]
///
/// A position is only meaningful for the sequence that returned it. Passing a
/// position obtained from another sequence instance is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Doubly-linked sequence with O(1) end operations and O(1) removal by position
///
/// Invariants kept by every mutating method:
/// - the head node has no `prev`, the tail node has no `next`
/// - `a.next == b` exactly when `b.prev == a`
/// - `head` and `tail` are either both set or both empty
#[derive(Debug)]
pub struct OrderedSequence<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> OrderedSequence<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values currently linked into the sequence
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index).and_then(|slot| slot.node.as_mut())
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.node_mut(index) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, index: usize, prev: Option<usize>) {
        if let Some(node) = self.node_mut(index) {
            node.prev = prev;
        }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(node.value)
    }

    /// Detach the node at `index` from its neighbours, fixing head and tail
    fn unlink(&mut self, index: usize) {
        let Some((prev, next)) = self.node(index).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }

        self.set_prev(index, None);
        self.set_next(index, None);
    }

    /// Append a value after the current tail
    ///
    /// # Returns
    /// A handle that can later be passed to [`OrderedSequence::remove_at`]
    pub fn append_end(&mut self, value: T) -> Position {
        let index = self.allocate(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        Position {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Unlink and return the head value, or `None` when the sequence is empty
    pub fn remove_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head);
        self.release(head)
    }

    /// Unlink and return the tail value, or `None` when the sequence is empty
    pub fn remove_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail);
        self.release(tail)
    }

    /// Unlink the node at `position` and return its value
    ///
    /// Works the same for the head, the tail, an interior node and a sole
    /// node. Returns `None` if the position was already removed.
    pub fn remove_at(&mut self, position: Position) -> Option<T> {
        let slot = self.slots.get(position.index)?;
        if slot.generation != position.generation || slot.node.is_none() {
            return None;
        }
        self.unlink(position.index);
        self.release(position.index)
    }

    /// Value at a zero-based index counted from the head
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// First position holding a value equal to `value`
    ///
    /// Element types used as identifiers (such as task ids) make this an
    /// identity search rather than a field comparison.
    pub fn find_position(&self, value: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index)?;
            if node.value == *value {
                return Some(Position {
                    index,
                    generation: self.slots[index].generation,
                });
            }
            current = node.next;
        }
        None
    }

    /// Stable insertion sort over the links
    ///
    /// Each node is detached in list order and inserted after the last
    /// already-sorted node that does not compare greater than it, scanning
    /// back from the sorted tail. Equal values keep their relative order and
    /// input that is already sorted costs a single pass.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }

        let mut sorted_head: Option<usize> = None;
        let mut sorted_tail: Option<usize> = None;
        let mut current = self.head;

        while let Some(index) = current {
            current = self.node(index).and_then(|node| node.next);

            let mut after = sorted_tail;
            while let Some(candidate) = after {
                match (self.node(candidate), self.node(index)) {
                    (Some(sorted), Some(new))
                        if compare(&sorted.value, &new.value) == Ordering::Greater =>
                    {
                        after = sorted.prev;
                    }
                    _ => break,
                }
            }

            let before = match after {
                Some(after) => self.node(after).and_then(|node| node.next),
                None => sorted_head,
            };

            self.set_prev(index, after);
            self.set_next(index, before);
            match after {
                Some(after) => self.set_next(after, Some(index)),
                None => sorted_head = Some(index),
            }
            match before {
                Some(before) => self.set_prev(before, Some(index)),
                None => sorted_tail = Some(index),
            }
        }

        self.head = sorted_head;
        self.tail = sorted_tail;
    }

    /// Traverse values from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            sequence: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`OrderedSequence`]
pub struct Iter<'a, T> {
    sequence: &'a OrderedSequence<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.sequence.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.sequence.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
