//! Standing ("always stock") list
//!
//! Loaded leniently: a bare name is a valid line. Duplicates are kept as-is.
//! The shopping list only reads this store; the `staple` commands edit the
//! backing file in the same line format.

use crate::codec::{self, DecodeMode};
use crate::error::Result;
use crate::record::{self, Record};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of a standing-list edit
#[derive(Debug, Clone, PartialEq)]
pub enum StapleOutcome {
    Added(String),
    AlreadyListed(String),
    /// Number of entries removed for the name
    Removed(String, usize),
    NotFound(String),
}

impl fmt::Display for StapleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StapleOutcome::Added(name) => write!(f, "Added {} to standard ingredients", name),
            StapleOutcome::AlreadyListed(name) => {
                write!(f, "{} is already a standard ingredient", name)
            }
            StapleOutcome::Removed(name, _) => {
                write!(f, "Removed {} from standard ingredients", name)
            }
            StapleOutcome::NotFound(name) => {
                write!(f, "{} not found in standard ingredients", name)
            }
        }
    }
}

/// Standing list backed by a lenient-format file
#[derive(Debug)]
pub struct StandingListStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl StandingListStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = codec::read_records(&path, DecodeMode::Lenient);
        Self { path, records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Names in file order, duplicates included
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `name` to the standing list unless it is already there
    pub fn insert(&mut self, name: &str) -> Result<StapleOutcome> {
        self.insert_dated(name, &record::today_date())
    }

    pub fn insert_dated(&mut self, name: &str, added_date: &str) -> Result<StapleOutcome> {
        record::validate_name(name)?;
        if self.contains(name) {
            return Ok(StapleOutcome::AlreadyListed(name.to_string()));
        }

        let record = Record::new(name, 0.0, "", added_date, 0);
        self.records.push(record.clone());
        codec::append_record(&self.path, &record)?;
        Ok(StapleOutcome::Added(name.to_string()))
    }

    /// Drop every entry named `name` and rewrite the file
    pub fn remove(&mut self, name: &str) -> Result<StapleOutcome> {
        let before = self.records.len();
        self.records.retain(|r| r.name != name);
        let removed = before - self.records.len();
        if removed == 0 {
            return Ok(StapleOutcome::NotFound(name.to_string()));
        }

        codec::write_records(&self.path, &self.records)?;
        Ok(StapleOutcome::Removed(name.to_string(), removed))
    }
}
