//! Shopping list derivation
//!
//! Pure function of the two stores: on-hand records that are low or about to
//! expire, plus standing-list names with no on-hand record.

use crate::inventory::InventoryStore;
use crate::record::Record;
use crate::standing::StandingListStore;
use serde::Serialize;

/// Measured quantities strictly below this are low
pub const LOW_QUANTITY_THRESHOLD: f64 = 1.0;

/// Records expiring within this many days (inclusive) are restocked
pub const EXPIRY_THRESHOLD_DAYS: i32 = 2;

/// Placeholder line when nothing needs restocking
pub const NO_RESTOCK_ITEMS: &str = "No items need restocking";

/// Placeholder line when every standing item is on hand
pub const NO_STANDARD_ITEMS: &str = "No standard items needed";

/// Why a record was put on the restock list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestockReason {
    /// `kg`/`liter` quantity below one
    LowQuantity,
    /// `expires_in` at or below the threshold
    ExpiringSoon,
}

/// One on-hand record selected for restocking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestockItem {
    #[serde(flatten)]
    pub record: Record,
    pub reasons: Vec<RestockReason>,
}

impl RestockItem {
    /// `name (0.50 kg, expires in 3 days)`
    pub fn describe(&self) -> String {
        self.record.describe()
    }
}

/// Restock reasons for `record`; empty when it does not need restocking
pub fn restock_reasons(record: &Record) -> Vec<RestockReason> {
    let mut reasons = Vec::new();
    if record.has_measured_unit() && record.quantity < LOW_QUANTITY_THRESHOLD {
        reasons.push(RestockReason::LowQuantity);
    }
    if record.expires_in <= EXPIRY_THRESHOLD_DAYS {
        reasons.push(RestockReason::ExpiringSoon);
    }
    reasons
}

/// Derived shopping list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    /// In on-hand order
    pub restock: Vec<RestockItem>,
    /// Standing-list names in file order, one per occurrence
    pub missing_standard: Vec<String>,
}

impl ShoppingList {
    pub fn generate(inventory: &InventoryStore, standing: &StandingListStore) -> Self {
        let restock = inventory
            .records()
            .iter()
            .filter_map(|record| {
                let reasons = restock_reasons(record);
                if reasons.is_empty() {
                    return None;
                }
                Some(RestockItem {
                    record: record.clone(),
                    reasons,
                })
            })
            .collect();

        let missing_standard = standing
            .names()
            .filter(|name| !inventory.exists(name))
            .map(str::to_string)
            .collect();

        let list = Self {
            restock,
            missing_standard,
        };
        log::debug!(
            "Shopping list: {} to restock, {} standard items missing",
            list.restock.len(),
            list.missing_standard.len()
        );
        list
    }

    pub fn is_empty(&self) -> bool {
        self.restock.is_empty() && self.missing_standard.is_empty()
    }

    /// Display strings for the restock section, or the placeholder
    pub fn restock_lines(&self) -> Vec<String> {
        if self.restock.is_empty() {
            return vec![NO_RESTOCK_ITEMS.to_string()];
        }
        self.restock.iter().map(RestockItem::describe).collect()
    }

    /// Display strings for the standard section, or the placeholder
    pub fn missing_standard_lines(&self) -> Vec<String> {
        if self.missing_standard.is_empty() {
            return vec![NO_STANDARD_ITEMS.to_string()];
        }
        self.missing_standard.clone()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
