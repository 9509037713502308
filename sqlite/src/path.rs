//! Storage-path resolution for named databases.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Resolves the on-disk location for a named database: the platform
/// user-data directory with the name appended verbatim.
///
/// No sanitization is applied to `name`. A name containing path
/// separators escapes the directory, and a name invalid for the target
/// filesystem surfaces as an open failure, not here.
///
/// # Errors
///
/// Returns [`StoreError::DataDir`] if the platform provides no user-data
/// directory.
pub fn default_db_path(name: &str) -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(StoreError::DataDir)?;
    Ok(dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_appends_name() {
        // Skip on platforms without a data directory (the error path is
        // covered by the StoreError::DataDir variant itself).
        if dirs::data_dir().is_none() {
            return;
        }
        let path = default_db_path("contacts.db").unwrap();
        assert!(path.ends_with("contacts.db"));
        assert!(path.starts_with(dirs::data_dir().unwrap()));
    }

    #[test]
    fn test_default_db_path_does_not_sanitize() {
        if dirs::data_dir().is_none() {
            return;
        }
        let path = default_db_path("nested/dir/contacts.db").unwrap();
        assert!(path.ends_with("nested/dir/contacts.db"));
    }
}
