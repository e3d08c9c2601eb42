use std::collections::HashMap;

use folio_forms::{field_plan, kind_placeholder, FieldPlan, MARKDOWN_INFO};
use folio_schema::{Color, DatabaseProperty, Page, PropertyKind, SelectOption, User};

fn option(id: &str, name: &str, color: Option<Color>) -> SelectOption {
    SelectOption {
        id: id.to_string(),
        name: name.to_string(),
        color,
    }
}

#[test]
fn test_placeholder_derivation() {
    assert_eq!(kind_placeholder("date"), "Date");
    assert_eq!(kind_placeholder("multi_select"), "Multi select");
    assert_eq!(kind_placeholder("phone_number"), "Phone number");
    assert_eq!(kind_placeholder("a_b_c"), "A b c");
    assert_eq!(kind_placeholder(""), "");
}

#[test]
fn test_date_property_gets_date_picker() {
    let property = DatabaseProperty::new("p1", "Due", PropertyKind::Date);
    let plan = field_plan(&property, None, &[]).expect("date must produce a field");
    assert_eq!(plan, FieldPlan::Date { title: "Due".to_string() });
}

#[test]
fn test_checkbox_label_is_derived_from_kind() {
    let property = DatabaseProperty::new("p2", "Done", PropertyKind::Checkbox);
    let plan = field_plan(&property, None, &[]).expect("checkbox must produce a field");
    // The label comes from the kind, not from the property name.
    assert_eq!(plan, FieldPlan::Checkbox { label: "Checkbox".to_string() });
}

#[test]
fn test_select_and_status_get_dropdowns() {
    let select = DatabaseProperty::new("p3", "Priority", PropertyKind::Select)
        .with_options(vec![option("o1", "High", Some(Color::Red))]);
    let status = DatabaseProperty::new("p4", "Stage", PropertyKind::Status)
        .with_options(vec![option("o2", "In progress", Some(Color::Blue))]);

    for property in [&select, &status] {
        let plan = field_plan(property, None, &[]).expect("must produce a field");
        match plan {
            FieldPlan::Dropdown { title, entries } => {
                assert_eq!(title, property.name);
                assert_eq!(entries.len(), 1);
            }
            other => panic!("expected a dropdown, got {:?}", other),
        }
    }
}

#[test]
fn test_multi_select_gets_tag_picker_with_option_entries() {
    let property = DatabaseProperty::new("p5", "Tags", PropertyKind::MultiSelect).with_options(vec![
        option("o1", "Rust", Some(Color::Orange)),
        option("o2", "Forms", None),
    ]);

    let plan = field_plan(&property, None, &[]).expect("multi_select must produce a field");
    match plan {
        FieldPlan::TagPicker {
            title,
            placeholder,
            entries,
        } => {
            assert_eq!(title, "Tags");
            assert_eq!(placeholder, "Multi select");
            let values: Vec<&str> = entries.iter().map(|e| e.value.as_str()).collect();
            assert_eq!(values, vec!["o1", "o2"]);
        }
        other => panic!("expected a tag picker, got {:?}", other),
    }
}

#[test]
fn test_relation_resolves_pages_through_map() {
    let property = DatabaseProperty::new("p6", "Project", PropertyKind::Relation).with_relation("db-2");

    let mut related = Page::new("page-1");
    related.title = Some("Roadmap".to_string());
    let mut relation_pages = HashMap::new();
    relation_pages.insert("db-2".to_string(), vec![related]);

    let plan = field_plan(&property, Some(&relation_pages), &[]).expect("relation must produce a field");
    match plan {
        FieldPlan::TagPicker { entries, .. } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].title, "Roadmap");
            assert_eq!(entries[0].value, "page-1");
        }
        other => panic!("expected a tag picker, got {:?}", other),
    }
}

#[test]
fn test_relation_with_no_pages_is_an_empty_picker() {
    let property = DatabaseProperty::new("p6", "Project", PropertyKind::Relation).with_relation("db-2");

    // No map at all.
    match field_plan(&property, None, &[]).expect("relation must produce a field") {
        FieldPlan::TagPicker { entries, .. } => assert!(entries.is_empty()),
        other => panic!("expected a tag picker, got {:?}", other),
    }

    // Map present but the related database has no entry.
    let relation_pages: HashMap<String, Vec<Page>> = HashMap::new();
    match field_plan(&property, Some(&relation_pages), &[]).expect("relation must produce a field") {
        FieldPlan::TagPicker { entries, .. } => assert!(entries.is_empty()),
        other => panic!("expected a tag picker, got {:?}", other),
    }
}

#[test]
fn test_people_gets_tag_picker_over_workspace_users() {
    let property = DatabaseProperty::new("p7", "Assignee", PropertyKind::People);
    let users = vec![User::new("u1", "Ada"), User::new("u2", "Grace")];

    let plan = field_plan(&property, None, &users).expect("people must produce a field");
    match plan {
        FieldPlan::TagPicker {
            placeholder,
            entries,
            ..
        } => {
            assert_eq!(placeholder, "People");
            let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
            assert_eq!(titles, vec!["Ada", "Grace"]);
        }
        other => panic!("expected a tag picker, got {:?}", other),
    }
}

#[test]
fn test_formula_renders_nothing() {
    let property = DatabaseProperty::new("p8", "Total", PropertyKind::Formula);
    assert_eq!(field_plan(&property, None, &[]), None);
}

#[test]
fn test_unrecognized_kind_falls_back_to_text_field() {
    let property = DatabaseProperty::new("p9", "Clips", PropertyKind::from_name("rollup"));

    let plan = field_plan(&property, None, &[]).expect("unknown kinds must still produce a field");
    match plan {
        FieldPlan::Text {
            title,
            placeholder,
            info,
        } => {
            assert_eq!(title, "Clips");
            assert_eq!(placeholder, "Rollup");
            assert_eq!(info, MARKDOWN_INFO);
        }
        other => panic!("expected a text field, got {:?}", other),
    }
}

#[test]
fn test_text_kinds_fall_back_to_text_field() {
    for kind in [
        PropertyKind::Title,
        PropertyKind::RichText,
        PropertyKind::Number,
        PropertyKind::Url,
        PropertyKind::Email,
        PropertyKind::PhoneNumber,
    ] {
        let property = DatabaseProperty::new("p", "Field", kind);
        match field_plan(&property, None, &[]) {
            Some(FieldPlan::Text { .. }) => {}
            other => panic!("expected a text field for {:?}, got {:?}", property.kind, other),
        }
    }
}

#[test]
fn test_dispatch_ignores_mismatched_config_blocks() {
    // A select config attached to a relation property must not leak into
    // the widget.
    let mut property = DatabaseProperty::new("p10", "Project", PropertyKind::Relation).with_relation("db-9");
    property.select = Some(folio_schema::SelectConfig {
        options: vec![option("o1", "Stray", None)],
    });

    match field_plan(&property, None, &[]).expect("relation must produce a field") {
        FieldPlan::TagPicker { entries, .. } => assert!(entries.is_empty()),
        other => panic!("expected a tag picker, got {:?}", other),
    }
}
