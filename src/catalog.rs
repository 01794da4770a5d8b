use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Deserialize;

use crate::model::Entry;

/// Shapes accepted when reading the data file. The canonical form is the
/// ordered pair list; the flat name-to-path map is the legacy format, still
/// readable so old data files keep working. Saves always write the
/// canonical form.
#[derive(Deserialize)]
#[serde(untagged)]
enum Record {
    Pairs(Vec<Entry>),
    Legacy(BTreeMap<String, String>),
}

impl Record {
    fn into_entries(self) -> Vec<Entry> {
        match self {
            Record::Pairs(entries) => entries,
            Record::Legacy(map) => map
                .into_iter()
                .map(|(name, path)| Entry::new(name, path))
                .collect(),
        }
    }
}

/// The ordered list of script entries and its backing file. Entry order is
/// menu order; names are unique. Every mutation writes the whole list back
/// to disk before returning, so the file always mirrors the last accepted
/// state. Single-threaded use only; there is no file locking, and two
/// processes sharing one data file will clobber each other.
pub struct Catalog {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl Catalog {
    /// Load the catalog from `path`. A missing file is an empty catalog;
    /// an unreadable or malformed one is logged and treated the same, so
    /// startup never fails on bad data.
    pub fn load(path: PathBuf) -> Self {
        let mut catalog = Self {
            path,
            entries: Vec::new(),
        };
        if !catalog.path.exists() {
            return catalog;
        }

        match fs::read_to_string(&catalog.path) {
            Ok(content) => match serde_json::from_str::<Record>(&content) {
                Ok(record) => catalog.entries = record.into_entries(),
                Err(e) => error!("malformed data file {:?}: {}", catalog.path, e),
            },
            Err(e) => error!("could not read data file {:?}: {}", catalog.path, e),
        }

        info!(
            "catalog: loaded {} entries from {:?}",
            catalog.entries.len(),
            catalog.path
        );
        catalog
    }

    // Write failures are logged and swallowed; the in-memory list stays the
    // source of truth until the next successful save. Callers are not told.
    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }

        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    error!("could not write data file {:?}: {}", self.path, e);
                }
            }
            Err(e) => error!("could not serialize catalog: {}", e),
        }
    }

    /// Add a script, or update the path of an existing name in place. Empty
    /// names and paths are rejected. The path is allowed to not exist yet
    /// (scripts are often registered before they are written); that only
    /// logs a warning.
    pub fn add(&mut self, name: &str, path: &str) -> bool {
        if name.is_empty() || path.is_empty() {
            return false;
        }
        if !Path::new(path).exists() {
            warn!("script path does not exist: {}", path);
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.path = path.to_string();
        } else {
            self.entries.push(Entry::new(name.to_string(), path.to_string()));
        }
        self.save();
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                self.entries.remove(index);
                self.save();
                true
            }
            None => false,
        }
    }

    pub fn move_up(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) if index > 0 => {
                self.entries.swap(index, index - 1);
                self.save();
                true
            }
            _ => false,
        }
    }

    pub fn move_down(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) if index + 1 < self.entries.len() => {
                self.entries.swap(index, index + 1);
                self.save();
                true
            }
            _ => false,
        }
    }

    /// The live list in menu order. Read-only; mutate through the
    /// operations above so changes hit the disk.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Point lookup. Absent names come back as the empty string, keeping
    /// this read path infallible for shells that only display it.
    pub fn path_of(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.path.as_str())
            .unwrap_or("")
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}
