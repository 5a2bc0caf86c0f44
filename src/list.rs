extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// Stable identifier of a slot in the list's arena.
///
/// Handles stay valid while their entry is linked into the list. Once an
/// entry is removed its slot goes onto the free list and the handle may be
/// handed out again by a later [`List::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(usize);

/// Slot of the head sentinel. The entry after it is the front of the list.
const HEAD: Handle = Handle(0);
/// Slot of the tail sentinel. The entry before it is the back of the list.
const TAIL: Handle = Handle(1);

/// A node in the doubly linked list.
///
/// Contains a value and the handles of the previous and next entries.
/// This structure is not meant to be used directly by users of the `List`.
struct Entry<T> {
    /// The value stored in this entry. `None` for sentinels and free slots.
    val: Option<T>,
    prev: Handle,
    next: Handle,
}

impl<T> Entry<T> {
    fn new(val: T) -> Self {
        Entry {
            val: Some(val),
            prev: HEAD,
            next: TAIL,
        }
    }

    /// Creates a sentinel entry. Sentinels never carry a value.
    fn new_sigil() -> Self {
        Entry {
            val: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// A doubly linked list with fixed capacity, stored in an arena.
///
/// Entries live in a `Vec` and link to each other through [`Handle`]s rather
/// than references. Two sentinel slots bound the sequence so that attaching
/// at the front and detaching from the back never need an end-of-list check.
/// All operations are O(1); [`List::add`] is amortized O(1) while the arena
/// is still growing and allocation-free once a freed slot can be reused.
///
/// # Examples
///
/// ```ignore
/// use bounded_lru::list::List;
/// use core::num::NonZeroUsize;
///
/// let mut list = List::new(NonZeroUsize::new(3).unwrap(), 3);
/// let node1 = list.add(10).unwrap();
/// let node2 = list.add(20).unwrap();
///
/// assert_eq!(list.update(node1, 15), Some(10));
/// assert_eq!(list.remove_last(), Some(15));
/// ```
pub struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    /// Arena holding both sentinels and every data entry.
    slots: Vec<Entry<T>>,
    /// Slots released by removals, reused before the arena grows.
    free: Vec<Handle>,
}

impl<T> List<T> {
    /// Creates a new List that holds at most `cap` items.
    ///
    /// `reserve` slots are allocated up front; the arena grows on demand
    /// beyond that, up to `cap` data entries.
    pub fn new(cap: NonZeroUsize, reserve: usize) -> List<T> {
        let mut slots = Vec::with_capacity(reserve.min(cap.get()).saturating_add(2));
        slots.push(Entry::new_sigil());
        slots.push(Entry::new_sigil());

        let mut list = List {
            cap,
            len: 0,
            slots,
            free: Vec::new(),
        };
        list.link_sentinels();
        list
    }

    fn link_sentinels(&mut self) {
        self.slots[HEAD.0].next = TAIL;
        self.slots[TAIL.0].prev = HEAD;
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    /// Handle of the last (least recently attached) entry.
    pub fn back(&self) -> Option<Handle> {
        let last = self.slots[TAIL.0].prev;
        (last != HEAD).then_some(last)
    }

    /// Returns true if `node` refers to a data entry currently in the list.
    fn is_linked(&self, node: Handle) -> bool {
        self.slots.get(node.0).is_some_and(|entry| entry.val.is_some())
    }

    /// Unlinks `node` from its neighbours. The slot keeps its value.
    fn detach(&mut self, node: Handle) {
        let (prev, next) = {
            let entry = &self.slots[node.0];
            (entry.prev, entry.next)
        };
        self.slots[prev.0].next = next;
        self.slots[next.0].prev = prev;
    }

    /// Links `node` directly after the head sentinel.
    fn attach(&mut self, node: Handle) {
        let first = self.slots[HEAD.0].next;
        {
            let entry = &mut self.slots[node.0];
            entry.prev = HEAD;
            entry.next = first;
        }
        self.slots[HEAD.0].next = node;
        self.slots[first.0].prev = node;
    }

    /// Detaches `node`, releases its slot and returns the value it held.
    ///
    /// Returns `None` for sentinels and for handles that are not linked.
    pub fn remove(&mut self, node: Handle) -> Option<T> {
        if !self.is_linked(node) {
            return None;
        }
        self.detach(node);
        self.len -= 1;
        self.free.push(node);
        self.slots[node.0].val.take()
    }

    /// Removes the last (least recently attached) item from the list.
    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.back()?;
        self.remove(last)
    }

    /// Moves a node to the front of the list (after the head sentinel).
    ///
    /// Does nothing for sentinels, unlinked handles, or the current front.
    pub fn move_to_front(&mut self, node: Handle) {
        if !self.is_linked(node) || self.slots[HEAD.0].next == node {
            return;
        }
        self.detach(node);
        self.attach(node);
    }

    /// Adds a value to the front of the list.
    ///
    /// Returns the handle of the new entry, or `None` if the list is full.
    pub fn add(&mut self, v: T) -> Option<Handle> {
        if self.is_full() {
            return None;
        }
        let entry = Entry::new(v);
        let node = match self.free.pop() {
            Some(node) => {
                self.slots[node.0] = entry;
                node
            }
            None => {
                self.slots.push(entry);
                Handle(self.slots.len() - 1)
            }
        };
        self.attach(node);
        self.len += 1;
        Some(node)
    }

    /// Replaces the value of `node` in place, returning the old value.
    ///
    /// The node keeps its position. Returns `None` (and drops `v`) when
    /// `node` is not linked.
    pub fn update(&mut self, node: Handle, v: T) -> Option<T> {
        let slot = self.get_mut(node)?;
        Some(core::mem::replace(slot, v))
    }

    /// Gets a reference to the value stored in `node`.
    pub fn get(&self, node: Handle) -> Option<&T> {
        self.slots.get(node.0)?.val.as_ref()
    }

    /// Gets a mutable reference to the value stored in `node`.
    pub fn get_mut(&mut self, node: Handle) -> Option<&mut T> {
        self.slots.get_mut(node.0)?.val.as_mut()
    }

    /// Clears the list, dropping all entries.
    ///
    /// The arena keeps its allocation so a refill does not allocate again.
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.free.clear();
        self.len = 0;
        self.link_sentinels();
    }

    /// Iterates values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.slots[HEAD.0].next,
            back: self.slots[TAIL.0].prev,
            remaining: self.len,
        }
    }
}

/// Front-to-back iterator over a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Handle,
    back: Handle,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front;
        self.front = self.list.slots[node.0].next;
        self.remaining -= 1;
        self.list.get(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back;
        self.back = self.list.slots[node.0].prev;
        self.remaining -= 1;
        self.list.get(node)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn list<T>(cap: usize) -> List<T> {
        List::new(NonZeroUsize::new(cap).unwrap(), cap)
    }

    fn values(list: &List<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_construct_and_cap() {
        let list = list::<u32>(3);
        assert_eq!(list.cap.get(), 3);
        assert_eq!(list.len(), 0);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(list.slots[HEAD.0].next, TAIL);
        assert_eq!(list.slots[TAIL.0].prev, HEAD);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_items() {
        let mut list = list::<u32>(2);
        let node1 = list.add(10).unwrap();
        let node2 = list.add(20).unwrap();
        assert_eq!(list.len(), 2);
        assert_ne!(node1, node2);
        // Should fail to add when at capacity
        assert!(list.add(30).is_none());
        assert_eq!(list.len(), 2);
        assert_eq!(values(&list), [20, 10]);
    }

    #[test]
    fn test_update_item() {
        let mut list = list::<u32>(2);
        let node1 = list.add(10).unwrap();
        list.add(20).unwrap();
        assert_eq!(list.update(node1, 99), Some(10));
        assert_eq!(list.get(node1), Some(&99));
        // Update does not move the node
        assert_eq!(values(&list), [20, 99]);
    }

    #[test]
    fn test_get_value() {
        let mut list = list::<u32>(2);
        let node = list.add(7).unwrap();
        assert_eq!(list.get(node), Some(&7));
        *list.get_mut(node).unwrap() = 8;
        assert_eq!(list.get(node), Some(&8));
        assert_eq!(list.get(HEAD), None);
        assert_eq!(list.get(TAIL), None);
        assert_eq!(list.get(Handle(42)), None);
    }

    #[test]
    fn test_remove_last() {
        let mut list = list::<u32>(3);
        list.add(1).unwrap();
        list.add(2).unwrap();
        list.add(3).unwrap();
        assert_eq!(list.remove_last(), Some(1));
        assert_eq!(list.remove_last(), Some(2));
        assert_eq!(list.remove_last(), Some(3));
        assert_eq!(list.remove_last(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_middle_and_sentinels() {
        let mut list = list::<u32>(3);
        list.add(1).unwrap();
        let middle = list.add(2).unwrap();
        list.add(3).unwrap();
        assert_eq!(list.remove(middle), Some(2));
        assert_eq!(values(&list), [3, 1]);
        // A removed handle is no longer linked
        assert_eq!(list.remove(middle), None);
        assert_eq!(list.remove(HEAD), None);
        assert_eq!(list.remove(TAIL), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = list::<u32>(3);
        let node1 = list.add(1).unwrap();
        list.add(2).unwrap();
        let node3 = list.add(3).unwrap();
        assert_eq!(values(&list), [3, 2, 1]);

        list.move_to_front(node1);
        assert_eq!(values(&list), [1, 3, 2]);

        // Moving the front is a no-op
        list.move_to_front(node1);
        assert_eq!(values(&list), [1, 3, 2]);

        list.move_to_front(node3);
        assert_eq!(values(&list), [3, 1, 2]);
        assert_eq!(list.len(), 3);

        list.move_to_front(HEAD);
        list.move_to_front(TAIL);
        assert_eq!(values(&list), [3, 1, 2]);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut list = list::<u32>(2);
        list.add(1).unwrap();
        list.add(2).unwrap();
        let arena = list.slots.len();
        let old_back = list.back().unwrap();
        assert_eq!(list.remove_last(), Some(1));
        let node = list.add(3).unwrap();
        assert_eq!(node, old_back);
        assert_eq!(list.slots.len(), arena);
        assert_eq!(values(&list), [3, 2]);
    }

    #[test]
    fn test_clear() {
        let mut list = list::<u32>(3);
        list.add(1).unwrap();
        list.add(2).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        assert_eq!(list.iter().count(), 0);
        list.add(5).unwrap();
        assert_eq!(values(&list), [5]);
    }

    #[test]
    fn test_is_empty_and_is_full() {
        let mut list = list::<u32>(2);
        assert!(list.is_empty());
        assert!(!list.is_full());
        list.add(1).unwrap();
        assert!(!list.is_empty());
        assert!(!list.is_full());
        list.add(2).unwrap();
        assert!(list.is_full());
        list.remove_last();
        assert!(!list.is_full());
    }

    #[test]
    fn test_iter_both_ends() {
        let mut list = list::<u32>(4);
        for v in 1..=4 {
            list.add(v).unwrap();
        }
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next_back(), Some(&1));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_list_complex_values() {
        let mut list = list::<(String, Vec<u8>)>(2);
        let node = list.add((String::from("a"), alloc::vec![1, 2])).unwrap();
        list.add((String::from("b"), alloc::vec![3])).unwrap();
        let old = list.update(node, (String::from("a"), alloc::vec![9])).unwrap();
        assert_eq!(old.1, [1, 2]);
        let (key, value) = list.remove_last().unwrap();
        assert_eq!(key, "a");
        assert_eq!(value, [9]);
    }

    #[test]
    fn test_length_consistency_after_complex_operations() {
        let mut list = list::<u32>(5);
        let mut handles = Vec::new();
        for v in 0..5 {
            handles.push(list.add(v).unwrap());
        }
        list.move_to_front(handles[0]);
        list.remove(handles[2]);
        list.move_to_front(handles[4]);
        list.remove_last();
        list.add(10).unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.iter().rev().count(), list.len());
        assert_eq!(values(&list), [10, 4, 0, 3]);
    }
}
