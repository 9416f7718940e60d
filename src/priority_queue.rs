//! File de priorité min adaptable.
//!
//! Tas binaire d'entrées `(priorité, numéro d'insertion)` plus un index
//! clé -> entrée. Une entrée retirée ou remplacée devient une pierre tombale
//! (`Slot::Tombstone`) : elle reste dans le tas et `pop` la saute.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::{MazeError, Result};

#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    priority: u32,
    /// Indice dans `slots`, croissant avec l'ordre d'insertion.
    slot: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ordre inversé pour un tas min ; à priorité égale, la plus ancienne sort
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
enum Slot<K, V> {
    Live(K, V),
    Tombstone,
}

#[derive(Debug)]
pub struct PriorityQueue<K, V> {
    heap: BinaryHeap<HeapEntry>,
    slots: Vec<Slot<K, V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for PriorityQueue<K, V>
where
    K: Eq + Hash + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PriorityQueue<K, V>
where
    K: Eq + Hash + Copy,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Ajoute `key` avec sa priorité. Si la clé est déjà présente,
    /// l'ancienne entrée est invalidée avant l'insertion.
    pub fn push(&mut self, key: K, value: V, priority: u32) {
        self.remove(&key);

        let slot = self.slots.len();
        self.slots.push(Slot::Live(key, value));
        self.index.insert(key, slot);
        self.heap.push(HeapEntry { priority, slot });
    }

    /// Retire l'entrée vivante de plus petite priorité.
    ///
    /// Appeler `pop` sur une file vide est une faute de l'appelant :
    /// `MazeError::EmptyQueueExtraction`.
    pub fn pop(&mut self) -> Result<(u32, K, V)> {
        while let Some(entry) = self.heap.pop() {
            let slot = std::mem::replace(&mut self.slots[entry.slot], Slot::Tombstone);
            if let Slot::Live(key, value) = slot {
                self.index.remove(&key);
                return Ok((entry.priority, key, value));
            }
        }
        Err(MazeError::EmptyQueueExtraction)
    }

    /// Invalide l'entrée de `key`. Renvoie `false` si la clé est absente.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(slot) => {
                self.slots[slot] = Slot::Tombstone;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Nombre d'entrées vivantes (pierres tombales exclues).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = PriorityQueue::new();
        queue.push('a', 1, 5);
        queue.push('b', 2, 1);
        queue.push('c', 3, 3);

        assert_eq!(queue.pop().unwrap(), (1, 'b', 2));
        assert_eq!(queue.pop().unwrap(), (3, 'c', 3));
        assert_eq!(queue.pop().unwrap(), (5, 'a', 1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        let mut queue = PriorityQueue::new();
        for key in ['x', 'y', 'z'] {
            queue.push(key, (), 4);
        }
        let order: Vec<char> = (0..3).map(|_| queue.pop().unwrap().1).collect();
        assert_eq!(order, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_push_existing_key_replaces_entry() {
        let mut queue = PriorityQueue::new();
        queue.push("far", 10, 10);
        queue.push("near", 1, 2);
        queue.push("far", 11, 1);

        assert_eq!(queue.len(), 2);
        assert!(queue.contains(&"far"));
        assert_eq!(queue.pop().unwrap(), (1, "far", 11));
        assert_eq!(queue.pop().unwrap(), (2, "near", 1));
        // l'ancienne entrée "far" est une pierre tombale, elle ne ressort pas
        assert!(matches!(queue.pop(), Err(MazeError::EmptyQueueExtraction)));
    }

    #[test]
    fn test_remove_tombstones_entry() {
        let mut queue = PriorityQueue::new();
        queue.push(1u8, "one", 1);
        queue.push(2u8, "two", 2);

        assert!(queue.remove(&1));
        assert!(!queue.remove(&1));
        assert!(!queue.contains(&1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop().unwrap(), (2, 2, "two"));
    }

    #[test]
    fn test_pop_on_empty_queue_fails() {
        let mut queue: PriorityQueue<u8, ()> = PriorityQueue::new();
        assert!(matches!(queue.pop(), Err(MazeError::EmptyQueueExtraction)));
    }
}
