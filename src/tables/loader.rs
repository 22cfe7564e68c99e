//! RON table loader
//!
//! Loads table data from a data directory, with fallback to the built-in
//! defaults.

use std::fs;
use std::path::Path;

use super::data::TableData;
use super::defaults::default_table_data;
use crate::error::DataError;

/// File holding every table
pub const TABLES_FILE: &str = "tables.ron";

impl TableData {
    /// Load `tables.ron` from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self, DataError> {
        let path = dir.join(TABLES_FILE);
        if !path.exists() {
            log::info!("No {} in {}, using built-in tables", TABLES_FILE, dir.display());
            return Ok(default_table_data());
        }

        let content = fs::read_to_string(&path).map_err(|e| DataError::io(&path, e))?;
        let data: TableData = ron::from_str(&content).map_err(|source| DataError::Parse {
            path: path.clone(),
            source,
        })?;

        log::info!(
            "Loaded {} abilities and {} collections from {}",
            data.abilities.len(),
            data.collections.len(),
            path.display()
        );
        Ok(data)
    }

    /// Load, or warn and fall back to the defaults
    pub fn load_or_default(dir: &Path) -> Self {
        Self::load(dir).unwrap_or_else(|e| {
            log::warn!("{}. Using built-in tables.", e);
            default_table_data()
        })
    }
}

/// Write the built-in tables to `dir` for editing
pub fn export_default_data(dir: &Path) -> Result<(), DataError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| DataError::io(dir, e))?;
    }

    let tables = default_table_data();
    let content = ron::ser::to_string_pretty(&tables, ron::ser::PrettyConfig::default())
        .map_err(|source| DataError::Serialize { what: "tables", source })?;
    let path = dir.join(TABLES_FILE);
    fs::write(&path, content).map_err(|e| DataError::io(&path, e))?;

    log::info!("Exported default tables to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("magicforge-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = scratch_dir("missing");
        let data = TableData::load(&dir).unwrap();
        assert_eq!(data, default_table_data());
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        export_default_data(&dir).unwrap();
        assert!(dir.join(TABLES_FILE).exists());

        let data = TableData::load(&dir).unwrap();
        assert_eq!(data, default_table_data());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_file_is_a_parse_error() {
        let dir = scratch_dir("bad");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TABLES_FILE), "(abilities: [").unwrap();

        assert!(matches!(TableData::load(&dir), Err(DataError::Parse { .. })));
        assert!(!TableData::load_or_default(&dir).abilities.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }
}
