use crate::core::category::Category;

/// A cell value: either the text declared on the line, or a marker that the
/// field was not declared at all. `Present(String::new())` is a real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Present(String),
    Absent,
}

impl FieldValue {
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Present(value.to_string())
    }
}

/// One bracketed `<...>` line projected onto its category's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    pub category: Category,
    /// One entry per column of `category`, in column order
    pub values: Vec<FieldValue>,
}

impl AttributeRecord {
    /// Look up a value by column name. Returns `None` for names outside the
    /// category's column set.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.category
            .columns()
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.values.get(i))
    }
}

/// A free-form `##name=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypairRecord {
    pub name: String,
    pub value: String,
}

impl KeypairRecord {
    #[must_use]
    pub fn into_values(self) -> Vec<FieldValue> {
        vec![FieldValue::Present(self.name), FieldValue::Present(self.value)]
    }
}
