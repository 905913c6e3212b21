// src/domain/favorites.rs

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::BTreeSet;

use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub next_state: bool,
    pub message: String,
}

/// Next favorite state for a car plus the confirmation shown to the user.
pub fn toggle_favorite(currently_favorite: bool, display_name: &str) -> FavoriteToggle {
    if currently_favorite {
        FavoriteToggle {
            next_state: false,
            message: format!("\"{display_name}\" removed from favorites"),
        }
    } else {
        FavoriteToggle {
            next_state: true,
            message: format!("\"{display_name}\" added to favorites"),
        }
    }
}

/// Where a user's favorites live. Handlers receive one of these instead of
/// reaching for a global.
pub trait FavoritesStore {
    fn is_favorite(&self, user_id: i64, car_id: i64) -> Result<bool, ServerError>;
    fn set_favorite(&self, user_id: i64, car_id: i64, favorite: bool) -> Result<(), ServerError>;
    /// Car ids, most recently favorited first.
    fn favorite_ids(&self, user_id: i64) -> Result<Vec<i64>, ServerError>;
}

/// Reads the current state, applies [`toggle_favorite`] and persists the result.
pub fn apply_toggle<S: FavoritesStore + ?Sized>(
    store: &S,
    user_id: i64,
    car_id: i64,
    display_name: &str,
) -> Result<FavoriteToggle, ServerError> {
    let current = store.is_favorite(user_id, car_id)?;
    let toggle = toggle_favorite(current, display_name);
    store.set_favorite(user_id, car_id, toggle.next_state)?;
    Ok(toggle)
}

/// Process-local store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryFavorites {
    entries: RefCell<Vec<(i64, i64)>>,
}

#[cfg(test)]
impl FavoritesStore for MemoryFavorites {
    fn is_favorite(&self, user_id: i64, car_id: i64) -> Result<bool, ServerError> {
        Ok(self.entries.borrow().contains(&(user_id, car_id)))
    }

    fn set_favorite(&self, user_id: i64, car_id: i64, favorite: bool) -> Result<(), ServerError> {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|e| *e != (user_id, car_id));
        if favorite {
            entries.push((user_id, car_id));
        }
        Ok(())
    }

    fn favorite_ids(&self, user_id: i64) -> Result<Vec<i64>, ServerError> {
        let mut seen = BTreeSet::new();
        Ok(self
            .entries
            .borrow()
            .iter()
            .rev()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, c)| *c)
            .filter(|c| seen.insert(*c))
            .collect())
    }
}
