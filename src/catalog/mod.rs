//! Excuse catalog: a validated, read-only list of excuse records.

mod builtin;

use crate::errors::{AppError, AppResult};
use crate::models::{Category, ExcuseRecord};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ExcuseRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids.
    pub fn new(records: Vec<ExcuseRecord>) -> AppResult<Self> {
        if records.is_empty() {
            return Err(AppError::Configuration("catalog is empty".into()));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(AppError::Configuration(format!(
                    "duplicate excuse id '{}'",
                    r.id
                )));
            }
        }

        Ok(Self { records })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> AppResult<Self> {
        Self::new(builtin::records())
    }

    /// Load a catalog from a YAML or JSON list of records.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        let records: Vec<ExcuseRecord> = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Configuration(format!("cannot parse {}: {}", path.display(), e))
        })?;

        Self::new(records)
    }

    /// Custom catalog when a path is configured, builtin otherwise.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(p) if !p.trim().is_empty() => {
                Self::from_file(&crate::utils::path::expand_tilde(p))
            }
            _ => Self::builtin(),
        }
    }

    pub fn records(&self) -> &[ExcuseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ExcuseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ExcuseRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }
}
