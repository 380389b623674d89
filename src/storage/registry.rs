//! Saved-games registry.
//!
//! `SavedGames` is the repository of game names known to exist on disk. It is
//! handed to every `Game` through `Storage` rather than living in a global,
//! and it reads through to the backend on every call, so two games sharing a
//! backend always agree on the list.
//!
//! The scratch game is never registered.

use std::rc::Rc;

use super::backend::StoreBackend;
use crate::core::StoreError;

/// Attribute of the registry document holding the names.
pub const NAMES_KEY: &str = "names";

/// Repository of saved game names.
#[derive(Clone)]
pub struct SavedGames {
    backend: Rc<dyn StoreBackend>,
    scope: String,
    scratch: String,
}

impl SavedGames {
    /// Registry stored in `scope` of `backend`, ignoring the `scratch` game.
    pub fn new(backend: Rc<dyn StoreBackend>, scope: impl Into<String>, scratch: impl Into<String>) -> Self {
        Self {
            backend,
            scope: scope.into(),
            scratch: scratch.into(),
        }
    }

    /// Snapshot of the registered names, in registration order.
    pub fn names(&self) -> Result<Vec<String>, StoreError> {
        self.backend.load(&self.scope)?.get(NAMES_KEY)
    }

    /// Check if a game is registered.
    pub fn contains(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.names()?.iter().any(|n| n == name))
    }

    /// Register a game. Returns `false` for the scratch game or a name
    /// already present.
    pub fn register(&self, name: &str) -> Result<bool, StoreError> {
        if name == self.scratch {
            return Ok(false);
        }
        let mut document = self.backend.load(&self.scope)?;
        let mut names: Vec<String> = document.get(NAMES_KEY)?;
        if names.iter().any(|n| n == name) {
            return Ok(false);
        }
        names.push(name.to_string());
        document.set(NAMES_KEY, &names)?;
        self.backend.save(&document)?;
        Ok(true)
    }

    /// Remove a game from the registry. Returns `false` if it was absent.
    pub fn deregister(&self, name: &str) -> Result<bool, StoreError> {
        let mut document = self.backend.load(&self.scope)?;
        let mut names: Vec<String> = document.get(NAMES_KEY)?;
        let before = names.len();
        names.retain(|n| n != name);
        if names.len() == before {
            return Ok(false);
        }
        document.set(NAMES_KEY, &names)?;
        self.backend.save(&document)?;
        Ok(true)
    }
}

impl std::fmt::Debug for SavedGames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavedGames")
            .field("scope", &self.scope)
            .field("scratch", &self.scratch)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn registry() -> SavedGames {
        SavedGames::new(Rc::new(MemoryBackend::new()), "saved_games", "temporary")
    }

    #[test]
    fn test_register_and_list() {
        let games = registry();
        assert!(games.names().unwrap().is_empty());

        assert!(games.register("a").unwrap());
        assert!(games.register("b").unwrap());
        assert!(!games.register("a").unwrap());

        assert_eq!(games.names().unwrap(), vec!["a", "b"]);
        assert!(games.contains("b").unwrap());
    }

    #[test]
    fn test_scratch_never_registered() {
        let games = registry();
        assert!(!games.register("temporary").unwrap());
        assert!(!games.contains("temporary").unwrap());
    }

    #[test]
    fn test_deregister() {
        let games = registry();
        games.register("a").unwrap();
        assert!(games.deregister("a").unwrap());
        assert!(!games.deregister("a").unwrap());
        assert!(games.names().unwrap().is_empty());
    }

    #[test]
    fn test_shared_backend_is_shared_view() {
        let backend: Rc<dyn StoreBackend> = Rc::new(MemoryBackend::new());
        let one = SavedGames::new(backend.clone(), "saved_games", "temporary");
        let two = SavedGames::new(backend, "saved_games", "temporary");

        one.register("shared").unwrap();
        assert!(two.contains("shared").unwrap());
    }
}
