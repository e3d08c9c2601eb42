use crate::property::PropertyKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored property value.
///
/// The shape is tied to the property kind: date properties hold
/// `Date`, checkboxes `Flag`, multi-select/relation/people an ordered
/// `Refs` id list, formulas `Empty` (computed, never editable), and
/// everything else `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
    Date(Option<NaiveDate>),
    Refs(Vec<String>),
    Empty,
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Option<NaiveDate>> {
        match self {
            PropertyValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_refs(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Refs(ids) => Some(ids),
            _ => None,
        }
    }

    /// The default value a field of the given kind starts from.
    pub fn default_for(kind: &PropertyKind) -> Self {
        match kind {
            PropertyKind::Date => PropertyValue::Date(None),
            PropertyKind::Checkbox => PropertyValue::Flag(false),
            PropertyKind::MultiSelect | PropertyKind::Relation | PropertyKind::People => {
                PropertyValue::Refs(Vec::new())
            }
            PropertyKind::Formula => PropertyValue::Empty,
            _ => PropertyValue::Text(String::new()),
        }
    }

    /// Whether this value has the shape the given kind binds to.
    pub fn conforms_to(&self, kind: &PropertyKind) -> bool {
        match kind {
            PropertyKind::Date => matches!(self, PropertyValue::Date(_)),
            PropertyKind::Checkbox => matches!(self, PropertyValue::Flag(_)),
            PropertyKind::MultiSelect | PropertyKind::Relation | PropertyKind::People => {
                matches!(self, PropertyValue::Refs(_))
            }
            PropertyKind::Formula => matches!(self, PropertyValue::Empty),
            _ => matches!(self, PropertyValue::Text(_)),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Flag(b)
    }
}

impl From<Option<NaiveDate>> for PropertyValue {
    fn from(d: Option<NaiveDate>) -> Self {
        PropertyValue::Date(d)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(ids: Vec<String>) -> Self {
        PropertyValue::Refs(ids)
    }
}

/// Property values of a page, keyed by property id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    values: HashMap<String, PropertyValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&PropertyValue> {
        self.values.get(id)
    }

    pub fn get_text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|v| v.as_text())
    }

    pub fn get_flag(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(|v| v.as_flag())
    }

    pub fn get_date(&self, id: &str) -> Option<Option<NaiveDate>> {
        self.get(id).and_then(|v| v.as_date())
    }

    pub fn get_refs(&self, id: &str) -> Option<&[String]> {
        self.get(id).and_then(|v| v.as_refs())
    }

    pub fn remove(&mut self, id: &str) -> Option<PropertyValue> {
        self.values.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
