// Random key -> action table, built once at startup

use super::action::{binding_for, PRINTABLE_KEYS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Immutable mapping from every non-reserved printable key to an action
#[derive(Debug, Clone)]
pub struct KeyMap<A> {
    table: HashMap<KeyCode, A>,
}

impl<A: Copy> KeyMap<A> {
    /// Assign each printable, non-reserved key a random action from `actions`
    pub fn with_rng<R: Rng + ?Sized>(actions: &[A], rng: &mut R) -> Self {
        let table = PRINTABLE_KEYS
            .iter()
            .filter(|key| binding_for(**key).is_none())
            .filter_map(|key| actions.choose(rng).map(|action| (*key, *action)))
            .collect();
        Self { table }
    }

    /// Action mapped to `key`, if the key is in the table
    pub fn get(&self, key: KeyCode) -> Option<A> {
        self.table.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
}

// Only inspected by tests
#[cfg(test)]
impl<A: Copy> KeyMap<A> {
    pub(crate) fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (KeyCode, A)> + '_ {
        self.table.iter().map(|(k, a)| (*k, *a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::reserved_bindings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Toy {
        Red,
        Green,
        Blue,
    }

    const TOYS: [Toy; 3] = [Toy::Red, Toy::Green, Toy::Blue];

    #[test]
    fn test_every_free_printable_key_is_mapped() {
        let map = KeyMap::with_rng(&TOYS, &mut StdRng::seed_from_u64(1));
        for key in PRINTABLE_KEYS {
            assert_eq!(map.get(*key).is_some(), binding_for(*key).is_none());
        }
    }

    #[test]
    fn test_reserved_keys_excluded() {
        let map = KeyMap::with_rng(&TOYS, &mut StdRng::seed_from_u64(2));
        for (key, _) in reserved_bindings() {
            assert_eq!(map.get(key), None);
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = KeyMap::with_rng(&TOYS, &mut StdRng::seed_from_u64(7));
        let b = KeyMap::with_rng(&TOYS, &mut StdRng::seed_from_u64(7));
        for (key, action) in a.iter() {
            assert_eq!(b.get(key), Some(action));
        }
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_uses_more_than_one_action() {
        let map = KeyMap::with_rng(&TOYS, &mut StdRng::seed_from_u64(3));
        let first = map.iter().next().map(|(_, a)| a).unwrap();
        assert!(map.iter().any(|(_, a)| a != first));
    }

    #[test]
    fn test_empty_action_list_gives_empty_table() {
        let map: KeyMap<Toy> = KeyMap::with_rng(&[], &mut StdRng::seed_from_u64(4));
        assert!(map.is_empty());
    }

    #[test]
    fn test_non_printable_keys_unmapped() {
        let map = KeyMap::with_rng(&TOYS, &mut StdRng::seed_from_u64(5));
        assert_eq!(map.get(KeyCode::F5), None);
        assert_eq!(map.get(KeyCode::Escape), None);
    }
}
