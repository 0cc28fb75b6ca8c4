//! On-hand ingredient store
//!
//! Owns the ordered records of `ingredients.txt`. Names are unique (exact,
//! case-sensitive). `add` appends one line to the backing file; `consume`
//! rewrites the whole file because removals change line positions.

use crate::codec::{self, DecodeMode};
use crate::error::Result;
use crate::record::{self, Record};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of an `add` request
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Record),
    /// Store already holds `capacity` records
    StorageFull,
    /// A record with this name already exists
    Duplicate(String),
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added(r) => write!(
                f,
                "Added: {} ({:.2} {}), expires in {} days",
                r.name, r.quantity, r.unit, r.expires_in
            ),
            AddOutcome::StorageFull => write!(f, "Error: Storage limit reached."),
            AddOutcome::Duplicate(name) => write!(f, "Ingredient exists: {}", name),
        }
    }
}

/// Result of a `consume` request
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumeOutcome {
    /// Requested amount covered the stock; record removed
    Removed(Record),
    /// Stock decremented; `remaining` is the record after the change
    Took { taken: f64, remaining: Record },
    NotFound(String),
}

impl fmt::Display for ConsumeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumeOutcome::Removed(r) => write!(f, "Removed: {}", r.name),
            ConsumeOutcome::Took { taken, remaining } => write!(
                f,
                "Took {:.2} {} of {} (remaining: {:.2})",
                taken, remaining.unit, remaining.name, remaining.quantity
            ),
            ConsumeOutcome::NotFound(name) => write!(f, "Not found: {}", name),
        }
    }
}

/// On-hand set backed by a strict-format file
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    records: Vec<Record>,
    capacity: usize,
}

impl InventoryStore {
    /// Load the store from `path`. A missing file gives an empty store.
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let records = codec::read_records(&path, DecodeMode::Strict);
        if records.len() > capacity {
            log::warn!(
                "{} holds {} records, above the capacity of {}; new additions will be rejected",
                path.display(),
                records.len(),
                capacity
            );
        }
        Self {
            path,
            records,
            capacity,
        }
    }

    /// Add a new ingredient stamped with today's date
    pub fn add(
        &mut self,
        name: &str,
        quantity: f64,
        unit: &str,
        expires_in: i32,
    ) -> Result<AddOutcome> {
        self.add_dated(name, quantity, unit, expires_in, &record::today_date())
    }

    /// Add with an explicit `added_date`
    ///
    /// Input is validated first; capacity and duplicate rejections leave the
    /// store and its file untouched. On success one line is appended.
    pub fn add_dated(
        &mut self,
        name: &str,
        quantity: f64,
        unit: &str,
        expires_in: i32,
        added_date: &str,
    ) -> Result<AddOutcome> {
        record::validate_name(name)?;
        record::validate_unit(unit)?;
        record::validate_quantity(quantity)?;

        if self.is_full() {
            log::debug!("Rejected '{}': {} of {} slots used", name, self.len(), self.capacity);
            return Ok(AddOutcome::StorageFull);
        }
        if self.exists(name) {
            return Ok(AddOutcome::Duplicate(name.to_string()));
        }

        let record = Record::new(name, quantity, unit, added_date, expires_in);
        self.records.push(record.clone());
        codec::append_record(&self.path, &record)?;

        log::info!("Added '{}' ({} records)", name, self.len());
        Ok(AddOutcome::Added(record))
    }

    /// Take `quantity` of `name` out of stock
    ///
    /// Requests at or above the stored amount remove the record; smaller
    /// requests decrement it. Any change rewrites the whole file.
    pub fn consume(&mut self, name: &str, quantity: f64) -> Result<ConsumeOutcome> {
        record::validate_quantity(quantity)?;

        let Some(index) = self.position(name) else {
            return Ok(ConsumeOutcome::NotFound(name.to_string()));
        };

        let outcome = if quantity >= self.records[index].quantity {
            ConsumeOutcome::Removed(self.records.remove(index))
        } else {
            let record = &mut self.records[index];
            record.quantity -= quantity;
            ConsumeOutcome::Took {
                taken: quantity,
                remaining: record.clone(),
            }
        };

        self.save()?;
        Ok(outcome)
    }

    /// Rewrite the backing file from the in-memory records
    pub fn save(&self) -> Result<()> {
        codec::write_records(&self.path, &self.records)
    }

    /// Exact, case-sensitive name lookup
    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    /// Records in insertion (file) order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
