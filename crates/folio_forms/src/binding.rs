use folio_schema::{DatabaseProperty, PropertyValue};

/// The triple connecting one widget to external form state: the property
/// id, the current value, and a display-only error string.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    pub id: String,
    pub value: PropertyValue,
    pub error: Option<String>,
}

/// Produces the per-field binding for a property.
///
/// Widgets never reach into form state directly; whoever owns the values
/// passes a `BindingSource` into the dispatcher instead.
pub trait BindingSource {
    fn binding(&self, property: &DatabaseProperty) -> FieldBinding;
}
