use crate::binding::{BindingSource, FieldBinding};
use folio_schema::{Database, DatabaseProperty, Page, PropertyMap, PropertyValue};
use std::collections::HashMap;

/// Owns the values and error strings of one open form.
///
/// Values are seeded per property kind and overlaid with a page's stored
/// values when editing; a stored value whose shape does not match its
/// property's kind falls back to the default. Errors are display-only
/// strings set by the caller; nothing here validates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: PropertyMap,
    errors: HashMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the state for a database's form, optionally overlaying the
    /// page being edited.
    pub fn seed(database: &Database, page: Option<&Page>) -> Self {
        let mut values = PropertyMap::new();
        for property in &database.properties {
            let stored = page.and_then(|p| p.properties.get(&property.id));
            let value = match stored {
                Some(v) if v.conforms_to(&property.kind) => v.clone(),
                _ => PropertyValue::default_for(&property.kind),
            };
            values.set(property.id.clone(), value);
        }
        Self { values, errors: HashMap::new() }
    }

    pub fn value(&self, id: &str) -> Option<&PropertyValue> {
        self.values.get(id)
    }

    pub fn set_value(&mut self, id: impl Into<String>, value: PropertyValue) {
        self.values.set(id, value);
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(|s| s.as_str())
    }

    pub fn set_error(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(id.into(), message.into());
    }

    pub fn clear_error(&mut self, id: &str) {
        self.errors.remove(id);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Snapshot of the current values, for submit.
    pub fn values(&self) -> PropertyMap {
        self.values.clone()
    }
}

impl BindingSource for FormState {
    fn binding(&self, property: &DatabaseProperty) -> FieldBinding {
        let value = self
            .value(&property.id)
            .cloned()
            .unwrap_or_else(|| PropertyValue::default_for(&property.kind));
        FieldBinding {
            id: property.id.clone(),
            value,
            error: self.error(&property.id).map(|s| s.to_string()),
        }
    }
}
