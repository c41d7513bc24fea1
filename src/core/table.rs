use std::collections::HashMap;

use serde::Serialize;

use crate::core::category::{Category, SHEET_ORDER};
use crate::core::record::{AttributeRecord, FieldValue, KeypairRecord};

/// A rectangular, column-fixed table for one category. Rows keep file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTable {
    pub category: Category,
    pub rows: Vec<Vec<FieldValue>>,
}

impl MetadataTable {
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        self.category.columns()
    }

    #[must_use]
    pub fn sheet_name(&self) -> &'static str {
        self.category.sheet_name()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Append-only accumulator for all category tables during a single header scan.
#[derive(Debug)]
pub struct TablesBuilder {
    rows: HashMap<Category, Vec<Vec<FieldValue>>>,
}

impl Default for TablesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TablesBuilder {
    #[must_use]
    pub fn new() -> Self {
        let rows = SHEET_ORDER.iter().map(|c| (*c, Vec::new())).collect();
        Self { rows }
    }

    pub fn push_attribute(&mut self, record: AttributeRecord) {
        self.push_row(record.category, record.values);
    }

    pub fn push_keypair(&mut self, record: KeypairRecord) {
        self.push_row(Category::Keypair, record.into_values());
    }

    fn push_row(&mut self, category: Category, values: Vec<FieldValue>) {
        debug_assert_eq!(values.len(), category.columns().len());
        self.rows.entry(category).or_default().push(values);
    }

    /// Freeze into one table per category, in sheet order.
    #[must_use]
    pub fn finish(mut self) -> HeaderTables {
        let tables = SHEET_ORDER
            .iter()
            .map(|category| MetadataTable {
                category: *category,
                rows: self.rows.remove(category).unwrap_or_default(),
            })
            .collect();
        HeaderTables { tables }
    }
}

/// Every category table parsed from one header, always eight of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTables {
    tables: Vec<MetadataTable>,
}

impl HeaderTables {
    /// Tables in workbook sheet order.
    pub fn iter(&self) -> impl Iterator<Item = &MetadataTable> {
        self.tables.iter()
    }

    /// # Panics
    ///
    /// Never: every category is populated by `TablesBuilder::finish`.
    #[must_use]
    pub fn get(&self, category: Category) -> &MetadataTable {
        self.tables
            .iter()
            .find(|t| t.category == category)
            .expect("every category has a table")
    }

    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(MetadataTable::len).sum()
    }

    #[must_use]
    pub fn summary(&self) -> Vec<SheetSummary> {
        self.tables
            .iter()
            .map(|t| SheetSummary {
                sheet: t.sheet_name().to_string(),
                rows: t.len(),
            })
            .collect()
    }
}

/// Row count of one written sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub sheet: String,
    pub rows: usize,
}
