//! Game persistence.
//!
//! Rooms keep only [`GameSnapshot`]s. The service rebuilds a [`Game`] from
//! its snapshot for every operation and writes the result back, so any store
//! that round-trips snapshots faithfully can back it.
//!
//! [`Game`]: chess_engine::Game

use chess_engine::GameSnapshot;
use std::collections::BTreeMap;

/// Storage for one snapshot per room.
pub trait GameStore {
    /// Returns the stored snapshot of a room, if the room exists.
    fn load(&self, room: &str) -> Option<GameSnapshot>;

    /// Stores the snapshot of a room, replacing any previous one.
    fn save(&mut self, room: &str, snapshot: GameSnapshot);

    /// Deletes a room. Returns false if it did not exist.
    fn remove(&mut self, room: &str) -> bool;

    /// Names of all rooms, sorted.
    fn rooms(&self) -> Vec<String>;

    fn contains(&self, room: &str) -> bool {
        self.load(room).is_some()
    }

    fn len(&self) -> usize {
        self.rooms().len()
    }
}

/// In-process store backed by a sorted map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    games: BTreeMap<String, GameSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, room: &str) -> Option<GameSnapshot> {
        self.games.get(room).cloned()
    }

    fn save(&mut self, room: &str, snapshot: GameSnapshot) {
        self.games.insert(room.to_string(), snapshot);
    }

    fn remove(&mut self, room: &str) -> bool {
        self.games.remove(room).is_some()
    }

    fn rooms(&self) -> Vec<String> {
        self.games.keys().cloned().collect()
    }

    fn contains(&self, room: &str) -> bool {
        self.games.contains_key(room)
    }

    fn len(&self) -> usize {
        self.games.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Game;

    #[test]
    fn save_load_remove() {
        let mut store = MemoryStore::new();
        assert!(!store.contains("a"));

        let snapshot = Game::default().to_snapshot();
        store.save("b", snapshot.clone());
        store.save("a", snapshot.clone());
        assert_eq!(store.load("a"), Some(snapshot));
        assert_eq!(store.rooms(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.len(), 2);

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(store.load("a"), None);
    }
}
