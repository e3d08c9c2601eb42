// Property-driven page form: each database property is dispatched to the
// matching input widget, bound through a `BindingSource`.

use std::collections::HashMap;

use dioxus::prelude::*;

use folio_forms::{field_plan, BindingSource, FieldPlan, FormState};
use folio_schema::{Database, DatabaseProperty, Page, PropertyMap, PropertyValue, User};

use crate::widgets::{CheckboxField, DateField, DropdownField, TagPickerField, TextField};

/// Render the input widget for one database property.
///
/// Returns `None` for read-only properties (formulas), so the caller can
/// simply skip them. Values and validation state come from `bindings`;
/// edits are reported as `(property id, new value)` pairs.
pub fn property_field(
    property: &DatabaseProperty,
    bindings: &dyn BindingSource,
    relation_pages: Option<&HashMap<String, Vec<Page>>>,
    users: &[User],
    on_change: EventHandler<(String, PropertyValue)>,
) -> Option<Element> {
    let plan = field_plan(property, relation_pages, users)?;
    let binding = bindings.binding(property);
    let key = property.id.clone();
    let id = property.id.clone();

    let field = match plan {
        FieldPlan::Date { title } => rsx! {
            DateField {
                key: "{key}",
                title,
                binding,
                on_change: move |value| on_change.call((id.clone(), value)),
            }
        },
        FieldPlan::Checkbox { label } => rsx! {
            CheckboxField {
                key: "{key}",
                label,
                binding,
                on_change: move |value| on_change.call((id.clone(), value)),
            }
        },
        FieldPlan::Dropdown { title, entries } => rsx! {
            DropdownField {
                key: "{key}",
                title,
                entries,
                binding,
                on_change: move |value| on_change.call((id.clone(), value)),
            }
        },
        FieldPlan::TagPicker {
            title,
            placeholder,
            entries,
        } => rsx! {
            TagPickerField {
                key: "{key}",
                title,
                placeholder,
                entries,
                binding,
                on_change: move |value| on_change.call((id.clone(), value)),
            }
        },
        FieldPlan::Text {
            title,
            placeholder,
            info,
        } => rsx! {
            TextField {
                key: "{key}",
                title,
                placeholder,
                info: info.to_string(),
                binding,
                on_change: move |value| on_change.call((id.clone(), value)),
            }
        },
    };

    Some(field)
}

/// Mode for the page form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    /// Create a new page.
    Create,
    /// Edit an existing page.
    Edit(Page),
}

#[derive(Props, PartialEq, Clone)]
pub struct PageFormProps {
    pub database: Database,
    pub users: Vec<User>,
    pub relation_pages: HashMap<String, Vec<Page>>,
    pub mode: FormMode,
    pub on_submit: EventHandler<PropertyMap>,
    pub on_cancel: EventHandler<()>,
}

/// Create-or-edit form for one database. Seeds a `FormState` from the
/// database schema (and the page being edited, if any) and renders one
/// widget per editable property.
#[allow(non_snake_case)]
pub fn PageForm(props: PageFormProps) -> Element {
    let on_submit = props.on_submit;
    let on_cancel = props.on_cancel;

    let seed_database = props.database.clone();
    let seed_mode = props.mode.clone();
    let mut form = use_signal(move || {
        let page = match &seed_mode {
            FormMode::Edit(page) => Some(page),
            FormMode::Create => None,
        };
        FormState::seed(&seed_database, page)
    });

    let on_field_change = use_callback(move |(id, value): (String, PropertyValue)| {
        form.write().set_value(id, value);
    });

    let heading = match &props.mode {
        FormMode::Edit(page) => format!("Edit \"{}\"", page.display_title()),
        FormMode::Create => format!("New page in {}", props.database.title),
    };
    let submit_label = match props.mode {
        FormMode::Edit(_) => "Save",
        FormMode::Create => "Create",
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; padding: 16px; max-width: 560px;",
            h2 { style: "margin: 0 0 16px 0; font-size: 16px; color: #1e293b;", "{heading}" }
            div { style: "display: flex; flex-direction: column;",
                for property in props.database.properties.iter() {
                    {
                        property_field(
                            property,
                            &*form.read(),
                            Some(&props.relation_pages),
                            &props.users,
                            on_field_change,
                        )
                    }
                }
            }
            div { style: "display: flex; gap: 8px; margin-top: 8px;",
                button {
                    style: "padding: 4px 12px; background: #0078d4; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| on_submit.call(form.read().values()),
                    "{submit_label}"
                }
                button {
                    style: "padding: 4px 12px; border: 1px solid #cbd5e1; background: white; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
