use super::{Recipe, RecipeId};
use crate::error::StoreError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current on-disk snapshot format version.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct BookSnapshot {
    version: u32,
    recipes: Vec<Recipe>,
}

/// The collection of saved recipes, indexed by name.
///
/// Recipes live in an arena and reference each other by [`RecipeId`], so
/// sub-recipe edges stay valid across saves and the enumeration order is the
/// insertion order (stable numbering for selection menus).
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    index: AHashMap<String, RecipeId>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a recipe and returns its id.
    ///
    /// Inserting a name that already exists replaces that entry in place:
    /// the id and the enumeration position stay stable, so existing
    /// sub-recipe references keep pointing at the replacement.
    pub fn insert(&mut self, recipe: Recipe) -> RecipeId {
        if let Some(&id) = self.index.get(recipe.name()) {
            self.recipes[id] = recipe;
            return id;
        }
        let id = self.recipes.len();
        self.index.insert(recipe.name().to_string(), id);
        self.recipes.push(recipe);
        id
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn get_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.recipes.get_mut(id)
    }

    pub fn find(&self, name: &str) -> Option<RecipeId> {
        self.index.get(name).copied()
    }

    /// Enumerates all recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecipeId, &Recipe)> {
        self.recipes.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Saves the whole book as a versioned snapshot using the bincode format.
    ///
    /// On failure the previous on-disk snapshot is left untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let snapshot = BookSnapshot {
            version: SNAPSHOT_VERSION,
            recipes: self.recipes.clone(),
        };
        let bytes =
            encode_to_vec(&snapshot, standard()).map_err(|e| StoreError::Encode(e.to_string()))?;
        fs::write(path, &bytes).map_err(|e| StoreError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Loads a snapshot written by [`save`](Self::save). The name index is
    /// rebuilt from the arena, so ids observed before saving stay valid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| StoreError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let (snapshot, _): (BookSnapshot, usize) = decode_from_slice(&bytes, standard())
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::VersionMismatch {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        let mut index = AHashMap::with_capacity(snapshot.recipes.len());
        for (id, recipe) in snapshot.recipes.iter().enumerate() {
            index.insert(recipe.name().to_string(), id);
        }
        Ok(Self {
            recipes: snapshot.recipes,
            index,
        })
    }

    /// Loads the book, falling back to an empty one when the snapshot is
    /// missing, unreadable, or from an unsupported version. Load failures
    /// are warnings, never fatal.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::new();
        }
        match Self::from_file(path) {
            Ok(book) => book,
            Err(e) => {
                log::warn!("Failed to load recipe snapshot: {}", e);
                Self::new()
            }
        }
    }
}
