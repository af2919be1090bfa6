//! The in-memory memento collection.
//!
//! `Mementos` is always sorted ascending by id. Lookups rely on that via
//! binary search, and every mutating operation preserves it: new records get
//! the largest id and go to the end, removals keep the relative order of what
//! remains.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{Memento, Modification};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mementos {
    items: Vec<Memento>,
}

impl Mementos {
    /// Build a collection from records in arbitrary order, sorting by id.
    pub fn from_records(mut items: Vec<Memento>) -> Self {
        if !items.windows(2).all(|w| w[0].id < w[1].id) {
            warn!("mementos are not sorted by id; sorting in memory");
            items.sort_by_key(|m| m.id);
        }
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Memento> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Memento] {
        &self.items
    }

    /// The id the next added memento will receive.
    pub fn next_id(&self) -> u64 {
        self.items.last().map_or(1, |m| m.id + 1)
    }

    /// Index of the memento with `id`, found by binary search.
    pub fn find_index(&self, id: u64) -> Option<usize> {
        self.items.binary_search_by_key(&id, |m| m.id).ok()
    }

    pub fn get(&self, id: u64) -> Option<&Memento> {
        self.find_index(id).map(|n| &self.items[n])
    }

    /// Append a new memento created at `now` (seconds since epoch).
    pub fn add(&mut self, message: &str, now: i64) -> StoreResult<&Memento> {
        if message.trim().is_empty() {
            return Err(StoreError::invalid("Please specify the message."));
        }
        let memento = Memento::new(self.next_id(), message.to_string(), now);
        debug!(?memento, "adding memento");
        self.items.push(memento);
        let n = self.items.len() - 1;
        Ok(&self.items[n])
    }

    /// Remove the memento with `id`, returning it.
    pub fn remove(&mut self, id: u64) -> StoreResult<Memento> {
        let n = self.find_index(id).ok_or(StoreError::NotFound { id })?;
        debug!(id, index = n, "found memento");
        Ok(self.items.remove(n))
    }

    /// Apply `modification` to the memento with `id`.
    pub fn modify(&mut self, id: u64, modification: &Modification) -> StoreResult<&Memento> {
        let n = self.find_index(id).ok_or(StoreError::NotFound { id })?;
        debug!(id, index = n, field = %modification.field(), "found memento");
        modification.apply(&mut self.items[n]);
        Ok(&self.items[n])
    }

    /// Pick one memento uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Memento> {
        self.items.choose(rng)
    }

    /// Pick one memento with probability proportional to its priority.
    /// Priorities below 1 weigh as 1.
    pub fn pick_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Memento> {
        if self.items.is_empty() {
            return None;
        }
        let weights = self.items.iter().map(|m| m.priority.max(1) as u64);
        let dist = WeightedIndex::new(weights).ok()?;
        Some(&self.items[dist.sample(rng)])
    }
}

impl<'a> IntoIterator for &'a Mementos {
    type Item = &'a Memento;
    type IntoIter = std::slice::Iter<'a, Memento>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(store: &Mementos) -> Vec<u64> {
        store.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_add_to_empty_starts_at_one() {
        let mut store = Mementos::default();
        let memento = store.add("buy milk", 100).unwrap();
        assert_eq!(memento.id, 1);
        assert_eq!(memento.priority, 1);
        assert_eq!(memento.created_at, 100);
    }

    #[test]
    fn test_add_uses_max_id_plus_one() {
        let mut store = Mementos::from_records(vec![
            Memento::new(3, "a".to_string(), 0),
            Memento::new(9, "b".to_string(), 0),
        ]);
        assert_eq!(store.add("c", 0).unwrap().id, 10);
    }

    #[test]
    fn test_add_rejects_empty_message() {
        let mut store = Mementos::default();
        assert!(matches!(
            store.add("", 0),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(store.add("   ", 0).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_remove_restores_sequence() {
        let mut store = Mementos::default();
        store.add("one", 1).unwrap();
        store.add("two", 2).unwrap();
        let before = store.clone();

        let id = store.add("three", 3).unwrap().id;
        store.remove(id).unwrap();

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = Mementos::default();
        for msg in ["a", "b", "c", "d"] {
            store.add(msg, 0).unwrap();
        }
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.message, "b");
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let mut store = Mementos::default();
        store.add("a", 0).unwrap();
        let before = store.clone();
        assert!(matches!(
            store.remove(5),
            Err(StoreError::NotFound { id: 5 })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_ids_stay_ascending_after_mixed_operations() {
        let mut store = Mementos::default();
        for i in 0..6 {
            store.add(&format!("m{i}"), 0).unwrap();
        }
        store.remove(6).unwrap();
        store.remove(2).unwrap();
        store.add("late", 0).unwrap();
        store.remove(1).unwrap();
        store.add("later", 0).unwrap();

        let ids = ids(&store);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_modify_priority() {
        let mut store = Mementos::default();
        store.add("buy milk", 0).unwrap();
        store.add("call mom", 0).unwrap();
        store.remove(1).unwrap();

        let updated = store.modify(2, &Modification::Priority(5)).unwrap();
        assert_eq!(updated.priority, 5);
        assert_eq!(updated.message, "call mom");
    }

    #[test]
    fn test_modify_missing_id_is_not_found() {
        let mut store = Mementos::default();
        store.add("a", 0).unwrap();
        let before = store.clone();
        assert!(matches!(
            store.modify(3, &Modification::Priority(2)),
            Err(StoreError::NotFound { id: 3 })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_from_records_sorts_by_id() {
        let store = Mementos::from_records(vec![
            Memento::new(5, "e".to_string(), 0),
            Memento::new(2, "b".to_string(), 0),
            Memento::new(4, "d".to_string(), 0),
        ]);
        assert_eq!(ids(&store), vec![2, 4, 5]);
        assert_eq!(store.get(4).unwrap().message, "d");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_pick_on_empty_is_none() {
        let store = Mementos::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(store.pick(&mut rng).is_none());
        assert!(store.pick_weighted(&mut rng).is_none());
    }

    #[test]
    fn test_pick_returns_a_member() {
        let mut store = Mementos::default();
        store.add("a", 0).unwrap();
        store.add("b", 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = store.pick(&mut rng).unwrap();
            assert!(store.get(picked.id).is_some());
        }
    }

    #[test]
    fn test_pick_weighted_favours_high_priority() {
        let mut store = Mementos::default();
        store.add("rare", 0).unwrap();
        store.add("common", 0).unwrap();
        store.modify(2, &Modification::Priority(50)).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let common = (0..1000)
            .filter(|_| store.pick_weighted(&mut rng).unwrap().id == 2)
            .count();
        assert!(common > 900, "expected mostly id 2, got {common}/1000");
    }

    #[test]
    fn test_pick_weighted_with_huge_priorities() {
        let mut store = Mementos::default();
        for msg in ["a", "b", "c"] {
            let id = store.add(msg, 0).unwrap().id;
            store.modify(id, &Modification::Priority(2_000_000_000)).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(1);
        let picked = store.pick_weighted(&mut rng).unwrap();
        assert!(store.get(picked.id).is_some());
    }

    #[test]
    fn test_pick_weighted_treats_low_priority_as_one() {
        let mut store = Mementos::default();
        store.add("zero", 0).unwrap();
        store.modify(1, &Modification::Priority(0)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(store.pick_weighted(&mut rng).unwrap().id, 1);
    }
}
