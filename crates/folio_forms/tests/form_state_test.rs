use folio_forms::{BindingSource, FormState};
use folio_schema::{Database, DatabaseProperty, Page, PropertyKind, PropertyValue};

fn sample_database() -> Database {
    let mut database = Database::new("db-1", "Tasks");
    database.add_property(DatabaseProperty::new("title", "Name", PropertyKind::Title));
    database.add_property(DatabaseProperty::new("due", "Due", PropertyKind::Date));
    database.add_property(DatabaseProperty::new("done", "Done", PropertyKind::Checkbox));
    database.add_property(DatabaseProperty::new("tags", "Tags", PropertyKind::MultiSelect));
    database.add_property(DatabaseProperty::new("total", "Total", PropertyKind::Formula));
    database
}

#[test]
fn test_seed_without_page_uses_kind_defaults() {
    let database = sample_database();
    let form = FormState::seed(&database, None);

    assert_eq!(form.value("title"), Some(&PropertyValue::Text(String::new())));
    assert_eq!(form.value("due"), Some(&PropertyValue::Date(None)));
    assert_eq!(form.value("done"), Some(&PropertyValue::Flag(false)));
    assert_eq!(form.value("tags"), Some(&PropertyValue::Refs(Vec::new())));
    assert_eq!(form.value("total"), Some(&PropertyValue::Empty));
}

#[test]
fn test_seed_overlays_stored_page_values() {
    let database = sample_database();
    let mut page = Page::new("page-1");
    page.properties.set("title", "Ship it");
    page.properties.set("done", true);
    page.properties.set("tags", vec!["o1".to_string(), "o2".to_string()]);

    let form = FormState::seed(&database, Some(&page));

    assert_eq!(form.value("title"), Some(&PropertyValue::Text("Ship it".to_string())));
    assert_eq!(form.value("done"), Some(&PropertyValue::Flag(true)));
    assert_eq!(
        form.value("tags"),
        Some(&PropertyValue::Refs(vec!["o1".to_string(), "o2".to_string()]))
    );
    // Untouched properties still get their defaults.
    assert_eq!(form.value("due"), Some(&PropertyValue::Date(None)));
}

#[test]
fn test_seed_rejects_mismatched_value_shapes() {
    let database = sample_database();
    let mut page = Page::new("page-1");
    // A text value stored under a checkbox property must not leak into
    // the flag field.
    page.properties.set("done", "yes");

    let form = FormState::seed(&database, Some(&page));
    assert_eq!(form.value("done"), Some(&PropertyValue::Flag(false)));
}

#[test]
fn test_set_value_replaces_previous_value() {
    let database = sample_database();
    let mut form = FormState::seed(&database, None);

    form.set_value("title", PropertyValue::Text("Draft".to_string()));
    form.set_value("title", PropertyValue::Text("Final".to_string()));
    assert_eq!(form.value("title"), Some(&PropertyValue::Text("Final".to_string())));

    let snapshot = form.values();
    assert_eq!(snapshot.get_text("title"), Some("Final"));
}

#[test]
fn test_errors_are_tracked_per_property() {
    let database = sample_database();
    let mut form = FormState::seed(&database, None);

    form.set_error("title", "Required");
    assert_eq!(form.error("title"), Some("Required"));
    assert_eq!(form.error("due"), None);

    form.clear_error("title");
    assert_eq!(form.error("title"), None);
}

#[test]
fn test_binding_source_exposes_values_and_errors() {
    let database = sample_database();
    let mut form = FormState::seed(&database, None);
    form.set_value("title", PropertyValue::Text("Hello".to_string()));
    form.set_error("title", "Too informal");

    let title_property = DatabaseProperty::new("title", "Name", PropertyKind::Title);
    let binding = form.binding(&title_property);
    assert_eq!(binding.id, "title");
    assert_eq!(binding.value, PropertyValue::Text("Hello".to_string()));
    assert_eq!(binding.error.as_deref(), Some("Too informal"));
}

#[test]
fn test_binding_for_unseeded_property_falls_back_to_default() {
    let form = FormState::new();
    let property = DatabaseProperty::new("later", "Added later", PropertyKind::Checkbox);

    let binding = form.binding(&property);
    assert_eq!(binding.value, PropertyValue::Flag(false));
    assert_eq!(binding.error, None);
}
