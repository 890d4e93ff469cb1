use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::core::{FieldDataType, License, LocalizedText};

/// One positional value in a data row.
///
/// Rows are heterogeneous, so every numeric use goes through
/// [`Cell::as_number`] instead of assuming the column's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

impl Cell {
    /// Numeric view of the cell. Text is never parsed.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Null => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Null => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Textual form used for categories and slice names.
    ///
    /// Numbers use the shortest round-trip form (`35`, `1.5`); null is empty.
    #[must_use]
    pub fn category_label(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Null => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, a number or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Cell, E> {
        Ok(Cell::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Cell, E> {
        Ok(Cell::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Cell, E> {
        Ok(Cell::Number(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Cell, E> {
        Ok(Cell::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Cell, E> {
        Ok(Cell::Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Null)
    }
}

/// Positional column descriptor. The first field is conventionally the
/// category (x) column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: FieldDataType,
    #[serde(default)]
    pub title: LocalizedText,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: FieldDataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            title: LocalizedText::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: LocalizedText) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.data_type == FieldDataType::Number
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Schema {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Numeric fields after the category column, with their row positions.
    pub fn value_fields(&self) -> impl Iterator<Item = (usize, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, field)| field.is_numeric())
    }
}

pub type Row = Vec<Cell>;

/// Tabular payload: schema plus row-oriented values.
///
/// Rows may be shorter than the schema; missing trailing cells read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub license: License,
    pub description: LocalizedText,
    pub schema: Schema,
    pub data: Vec<Row>,
}

impl ChartData {
    #[must_use]
    pub fn new(schema: Schema, data: Vec<Row>) -> Self {
        Self {
            schema,
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }
}
