use serde::{Deserialize, Serialize};

/// One named script registration. Serialized as a two-element
/// `[name, path]` array, the shape the data file has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entry {
    pub name: String, // Unique display name, doubles as the lookup key
    pub path: String, // Script filepath; may not exist yet at add time
}

impl Entry {
    pub fn new(name: String, path: String) -> Self {
        Self { name, path }
    }

    /// Display string for list rows and menus: `name (path)`. Shells must
    /// address entries by name, not by parsing this back apart.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.path)
    }
}

impl From<(String, String)> for Entry {
    fn from((name, path): (String, String)) -> Self {
        Self { name, path }
    }
}

impl From<Entry> for (String, String) {
    fn from(entry: Entry) -> Self {
        (entry.name, entry.path)
    }
}
