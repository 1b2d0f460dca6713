//! JSON-file backed employee store.
//!
//! Every write replaces the whole collection. There is no locking: two
//! concurrent writers race and the last one wins.

use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use serde_json::error::Category;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EmployeeStore {
    path: PathBuf,
}

impl EmployeeStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every employee.
    ///
    /// A missing file, an empty one or one that is not valid JSON is treated
    /// as an empty roster and rewritten as an empty JSON list. Well-formed JSON
    /// holding an invalid record is left untouched and reported as
    /// `InvalidRecord`.
    pub fn load_all(&self) -> AppResult<Vec<Employee>> {
        match self.read_collection() {
            Ok(employees) => Ok(employees),
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "employee file missing, creating it");
                self.save_all(&[])?;
                Ok(Vec::new())
            }
            Err(AppError::StorageCorrupt(reason)) => {
                warn!(path = %self.path.display(), %reason, "employee file corrupt, resetting");
                self.save_all(&[])?;
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite the store with `employees`.
    ///
    /// Written to a uniquely named sibling temp file first and renamed into
    /// place, so overlapping writers never share a temp file.
    pub fn save_all(&self, employees: &[Employee]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(employees)?;
        let tmp = self.tmp_path();
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        debug!(path = %self.path.display(), count = employees.len(), "employees saved");
        Ok(())
    }

    fn read_collection(&self) -> AppResult<Vec<Employee>> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| match e.classify() {
            Category::Syntax | Category::Eof => AppError::StorageCorrupt(e.to_string()),
            Category::Data => AppError::InvalidRecord(e.to_string()),
            Category::Io => AppError::Json(e),
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "employees.json".into());
        name.push(format!(".{}.tmp", Uuid::new_v4()));
        self.path.with_file_name(name)
    }
}
