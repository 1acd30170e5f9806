//! Ordered in-memory store of startups.
//!
//! Commands address records by their position in this list (see
//! [`crate::Index`]). A book can be seeded from a JSON array; it is never
//! written back.

use std::path::Path;

use super::startup::Startup;

/// Errors raised while building a book.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// Book file could not be read
    #[error("cannot read startup book {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Book contents are not a valid JSON array of startups
    #[error("malformed startup book: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share a name
    #[error("duplicate startup in book: {0}")]
    DuplicateStartup(String),
}

/// The list of tracked startups, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupBook {
    startups: Vec<Startup>,
}

impl StartupBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from a JSON array of startup records.
    ///
    /// Every field goes through its format rule during deserialization, and
    /// records sharing a name are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, BookError> {
        let records: Vec<Startup> = serde_json::from_str(json)?;
        let mut book = StartupBook::new();
        for startup in records {
            book.add(startup)?;
        }
        Ok(book)
    }

    /// Read a book from a JSON file.
    pub fn load(path: &Path) -> Result<Self, BookError> {
        let json = std::fs::read_to_string(path).map_err(|source| BookError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let book = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), startups = book.len(), "loaded startup book");
        Ok(book)
    }

    /// Append a startup, rejecting one that duplicates an existing record.
    pub fn add(&mut self, startup: Startup) -> Result<(), BookError> {
        if self.has_startup(&startup) {
            return Err(BookError::DuplicateStartup(startup.name.to_string()));
        }
        self.startups.push(startup);
        Ok(())
    }

    /// Whether a record describing the same startup is already present.
    pub fn has_startup(&self, startup: &Startup) -> bool {
        self.startups.iter().any(|s| s.is_same_startup(startup))
    }

    /// Replace the record at `zero_based` with `edited`.
    ///
    /// Callers check bounds and duplicates first; an out-of-range offset is
    /// reported as `false` and leaves the book untouched.
    pub fn set_startup(&mut self, zero_based: usize, edited: Startup) -> bool {
        match self.startups.get_mut(zero_based) {
            Some(slot) => {
                *slot = edited;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, zero_based: usize) -> Option<&Startup> {
        self.startups.get(zero_based)
    }

    pub fn startups(&self) -> &[Startup] {
        &self.startups
    }

    pub fn len(&self) -> usize {
        self.startups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.startups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BOOK_JSON: &str = r#"[
        {
            "name": "Acme",
            "phone": "94351253",
            "email": "hello@acme.io",
            "address": "123 Jurong West Ave 6",
            "industry": "Robotics",
            "funding_stage": "S",
            "valuation": "1200000",
            "tags": ["hardware"]
        },
        {
            "name": "Globex",
            "phone": "98765432",
            "email": "ops@globex.com",
            "address": "311 Clementi Ave 2",
            "industry": "Fintech",
            "funding_stage": "A",
            "valuation": "8000000.50"
        }
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let book = StartupBook::from_json_str(BOOK_JSON).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(0).unwrap().name.as_str(), "Acme");
        assert_eq!(book.get(1).unwrap().name.as_str(), "Globex");
    }

    #[test]
    fn test_from_json_rejects_duplicate_names() {
        let json = format!(
            "[{0}, {0}]",
            r#"{"name": "Acme", "phone": "911", "email": "a@b.co", "address": "x",
                "industry": "AI", "funding_stage": "PS", "valuation": "0"}"#
        );
        let err = StartupBook::from_json_str(&json).unwrap_err();
        assert!(matches!(err, BookError::DuplicateStartup(name) if name == "Acme"));
    }

    #[test]
    fn test_from_json_rejects_invalid_field() {
        let json = r#"[{"name": "Acme", "phone": "12", "email": "a@b.co", "address": "x",
            "industry": "AI", "funding_stage": "PS", "valuation": "0"}]"#;
        assert!(matches!(
            StartupBook::from_json_str(json),
            Err(BookError::Malformed(_))
        ));
    }

    #[test]
    fn test_set_startup_out_of_range_is_noop() {
        let mut book = StartupBook::from_json_str(BOOK_JSON).unwrap();
        let replacement = book.get(1).unwrap().clone();
        assert!(!book.set_startup(5, replacement));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("book.json");
        std::fs::write(&path, BOOK_JSON).unwrap();

        let book = StartupBook::load(&path).unwrap();
        assert_eq!(book.len(), 2);

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            StartupBook::load(&missing),
            Err(BookError::Read { .. })
        ));
    }
}
