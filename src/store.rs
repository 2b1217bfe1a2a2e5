use crate::error::DataLoadError;
use crate::model::{
    Animal, AnimalsFile, AttributeRelationship, Award, AwardsFile, RelationshipsFile,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Keyed records in first-insertion order.
///
/// Re-inserting an existing key replaces the value but keeps its original slot.
#[derive(Debug, Clone)]
pub struct Table<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, key: String, value: T) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot] = value,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Locations of the four JSON files the store is built from.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub earth_animals: PathBuf,
    pub alien_animals: PathBuf,
    pub awards: PathBuf,
    pub attributes: PathBuf,
}

impl DataSources {
    pub fn in_dir(dir: &Path) -> Self {
        DataSources {
            earth_animals: dir.join("earth_animals.json"),
            alien_animals: dir.join("alien_animals.json"),
            awards: dir.join("awards.json"),
            attributes: dir.join("attributes.json"),
        }
    }
}

/// Load-once, read-many holder of every animal, award and attribute relationship.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub(crate) animals: Table<Animal>,
    pub(crate) awards: Table<Award>,
    pub(crate) relationships: Table<AttributeRelationship>,
}

impl RecordStore {
    /// Build the store from already-parsed records. Later duplicates win.
    pub fn from_records(
        animals: impl IntoIterator<Item = Animal>,
        awards: impl IntoIterator<Item = Award>,
        relationships: impl IntoIterator<Item = AttributeRelationship>,
    ) -> Self {
        let mut store = RecordStore::default();
        for animal in animals {
            store.animals.insert(animal.id.clone(), animal);
        }
        for award in awards {
            store.awards.insert(award.id.clone(), award);
        }
        for rel in relationships {
            store.relationships.insert(rel.attribute.clone(), rel);
        }
        store
    }

    /// Read earth animals, alien animals, awards and relationships, in that order.
    pub fn load(sources: &DataSources) -> Result<Self, DataLoadError> {
        let earth: AnimalsFile = read_json(&sources.earth_animals)?;
        log_file(&sources.earth_animals, earth.animals.len());
        let alien: AnimalsFile = read_json(&sources.alien_animals)?;
        log_file(&sources.alien_animals, alien.animals.len());
        let awards: AwardsFile = read_json(&sources.awards)?;
        log_file(&sources.awards, awards.awards.len());
        let rels: RelationshipsFile = read_json(&sources.attributes)?;
        log_file(&sources.attributes, rels.relationships.len());

        let store = RecordStore::from_records(
            earth.animals.into_iter().chain(alien.animals),
            awards.awards,
            rels.relationships,
        );
        tracing::info!(
            animals = store.animals.len(),
            awards = store.awards.len(),
            relationships = store.relationships.len(),
            "game data loaded"
        );
        Ok(store)
    }

    pub fn load_dir(dir: &Path) -> Result<Self, DataLoadError> {
        Self::load(&DataSources::in_dir(dir))
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn award_count(&self) -> usize {
        self.awards.len()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn log_file(path: &Path, records: usize) {
    tracing::debug!(path = %path.display(), records, "read data file");
}
