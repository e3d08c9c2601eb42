use crate::options::{page_entries, select_entries, user_entries, SelectEntry};
use folio_schema::{DatabaseProperty, Page, PropertyKind, User};
use std::collections::HashMap;

/// Helper text shown under generic text fields.
pub const MARKDOWN_INFO: &str = "Supports a single line of inline Markdown";

/// Turn a raw kind string into field placeholder text: underscores become
/// spaces and only the first character is uppercased
/// ("multi_select" -> "Multi select").
pub fn kind_placeholder(kind: &str) -> String {
    let spaced = kind.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// The widget a property dispatches to, with everything the rendering
/// layer needs already resolved: labels, placeholder text, and mapped
/// option entries.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPlan {
    /// Date picker; empty input clears back to no date.
    Date { title: String },
    /// Boolean toggle. The derived placeholder is the label; checkboxes
    /// carry no title of their own.
    Checkbox { label: String },
    /// Single-choice dropdown over the property's configured options.
    Dropdown { title: String, entries: Vec<SelectEntry> },
    /// Multi-choice tag picker (multi-select options, related pages, or
    /// users). An empty entry list is a picker with nothing to add, not
    /// an error.
    TagPicker {
        title: String,
        placeholder: String,
        entries: Vec<SelectEntry>,
    },
    /// Single-line text input, the default for every unrecognized kind.
    Text {
        title: String,
        placeholder: String,
        info: &'static str,
    },
}

/// Choose the widget for one property.
///
/// Returns `None` only for formula properties, which are computed and
/// never rendered. A relation whose database has no entry in
/// `relation_pages` gets a tag picker with zero options.
pub fn field_plan(
    property: &DatabaseProperty,
    relation_pages: Option<&HashMap<String, Vec<Page>>>,
    users: &[User],
) -> Option<FieldPlan> {
    let placeholder = kind_placeholder(property.kind.as_str());
    match &property.kind {
        PropertyKind::Date => Some(FieldPlan::Date { title: property.name.clone() }),
        PropertyKind::Checkbox => Some(FieldPlan::Checkbox { label: placeholder }),
        PropertyKind::Select | PropertyKind::Status => Some(FieldPlan::Dropdown {
            title: property.name.clone(),
            entries: select_entries(property.select_options()),
        }),
        PropertyKind::MultiSelect => Some(FieldPlan::TagPicker {
            title: property.name.clone(),
            placeholder,
            entries: select_entries(property.select_options()),
        }),
        PropertyKind::Relation => {
            let pages = property
                .relation_database_id()
                .and_then(|db_id| relation_pages.and_then(|m| m.get(db_id)));
            Some(FieldPlan::TagPicker {
                title: property.name.clone(),
                placeholder,
                entries: pages.map(|p| page_entries(p)).unwrap_or_default(),
            })
        }
        PropertyKind::People => Some(FieldPlan::TagPicker {
            title: property.name.clone(),
            placeholder,
            entries: user_entries(users),
        }),
        PropertyKind::Formula => None,
        _ => Some(FieldPlan::Text {
            title: property.name.clone(),
            placeholder,
            info: MARKDOWN_INFO,
        }),
    }
}
