//! Ingredient record shared by the on-hand set and the standing list

use crate::config::{MAX_NAME_LEN, MAX_UNIT_LEN};
use crate::error::{PantryError, Result};
use serde::Serialize;

/// Units whose quantity counts toward the low-stock restock rule
pub const MEASURED_UNITS: [&str; 2] = ["kg", "liter"];

/// One ingredient entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// `YYYY-MM-DD`, stamped once on add; empty for bare standing-list lines
    pub added_date: String,
    /// Days until expiry as given on add. Never recomputed.
    pub expires_in: i32,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        added_date: impl Into<String>,
        expires_in: i32,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            added_date: added_date.into(),
            expires_in,
        }
    }

    /// A record with only a name; every other field at its zero value
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, "", "", 0)
    }

    /// True for `kg` and `liter` (exact, case-sensitive)
    pub fn has_measured_unit(&self) -> bool {
        MEASURED_UNITS.contains(&self.unit.as_str())
    }

    /// `name (0.50 kg, expires in 3 days)`
    pub fn describe(&self) -> String {
        format!(
            "{} ({:.2} {}, expires in {} days)",
            self.name, self.quantity, self.unit, self.expires_in
        )
    }
}

/// Today's date as `YYYY-MM-DD` using local system time
pub fn today_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Check an ingredient name before it reaches a store
pub fn validate_name(name: &str) -> Result<()> {
    validate_token(name, MAX_NAME_LEN).map_err(PantryError::InvalidName)
}

/// Check a unit token before it reaches a store
pub fn validate_unit(unit: &str) -> Result<()> {
    validate_token(unit, MAX_UNIT_LEN).map_err(PantryError::InvalidUnit)
}

/// Quantities must be finite and non-negative
pub fn validate_quantity(quantity: f64) -> Result<()> {
    if quantity.is_finite() && quantity >= 0.0 {
        Ok(())
    } else {
        Err(PantryError::InvalidQuantity(quantity))
    }
}

fn validate_token(value: &str, max_len: usize) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.chars().count() > max_len {
        return Err(format!("'{}' is longer than {} characters", value, max_len));
    }
    if value.contains(['|', '\n', '\r']) {
        return Err(format!("'{}' contains '|' or a line break", value.escape_debug()));
    }
    Ok(())
}
