use folio_schema::{
    draft_title, Database, DatabaseProperty, Page, PropertyKind, PropertyMap, Workspace,
};

fn sample_workspace() -> Workspace {
    let mut workspace = Workspace::new("Acme");

    let mut tasks = Database::new("db-1", "Tasks");
    tasks.add_property(DatabaseProperty::new("t", "Name", PropertyKind::Title));
    tasks.add_property(DatabaseProperty::new("done", "Done", PropertyKind::Checkbox));
    workspace.databases.push(tasks);

    let mut projects = Database::new("db-2", "Projects");
    projects.add_property(DatabaseProperty::new("t2", "Name", PropertyKind::Title));
    workspace.databases.push(projects);

    let mut page = Page::new("page-1");
    page.title = Some("Existing".to_string());
    page.parent_database_id = Some("db-1".to_string());
    page.properties.set("t", "Existing");
    workspace.pages.push(page);

    let mut other = Page::new("page-2");
    other.title = Some("Roadmap".to_string());
    other.parent_database_id = Some("db-2".to_string());
    workspace.pages.push(other);

    workspace
}

#[test]
fn test_apply_draft_creates_a_page() {
    let mut workspace = sample_workspace();

    let mut values = PropertyMap::new();
    values.set("t", "Write docs");
    values.set("done", false);

    let created = workspace
        .apply_draft("db-1", None, values)
        .expect("known database must accept a draft");

    let page = workspace.get_page(&created).expect("created page must exist");
    println!("created page id: {}", page.id);
    assert_eq!(page.title.as_deref(), Some("Write docs"));
    assert_eq!(page.parent_database_id.as_deref(), Some("db-1"));
    assert!(page.last_edited_time.is_some());
    assert_eq!(page.properties.get_text("t"), Some("Write docs"));
    assert_eq!(workspace.pages.len(), 3);
}

#[test]
fn test_apply_draft_updates_an_existing_page() {
    let mut workspace = sample_workspace();

    let mut values = PropertyMap::new();
    values.set("t", "Renamed");
    values.set("done", true);

    let touched = workspace
        .apply_draft("db-1", Some("page-1"), values)
        .expect("existing page must accept a draft");
    assert_eq!(touched, "page-1");

    let page = workspace.get_page("page-1").expect("page must still exist");
    assert_eq!(page.title.as_deref(), Some("Renamed"));
    assert_eq!(page.properties.get_flag("done"), Some(true));
    assert!(page.last_edited_time.is_some());
    // No page was added.
    assert_eq!(workspace.pages.len(), 2);
}

#[test]
fn test_apply_draft_rejects_unknown_targets() {
    let mut workspace = sample_workspace();

    let unknown_db = workspace.apply_draft("db-404", None, PropertyMap::new());
    assert_eq!(unknown_db, None);

    let unknown_page = workspace.apply_draft("db-1", Some("page-404"), PropertyMap::new());
    assert_eq!(unknown_page, None);
}

#[test]
fn test_relation_pages_groups_by_parent_database() {
    let mut workspace = sample_workspace();

    // A page without a parent database never shows up in the map.
    workspace.pages.push(Page::new("orphan"));

    let grouped = workspace.relation_pages();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["db-1"].len(), 1);
    assert_eq!(grouped["db-1"][0].id, "page-1");
    assert_eq!(grouped["db-2"][0].id, "page-2");
}

#[test]
fn test_pages_of_filters_by_database() {
    let workspace = sample_workspace();
    let pages = workspace.pages_of("db-1");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].id, "page-1");
    assert!(workspace.pages_of("db-404").is_empty());
}

#[test]
fn test_draft_title_reads_the_title_property() {
    let workspace = sample_workspace();
    let database = workspace.get_database("db-1").expect("db-1 must exist");

    let mut values = PropertyMap::new();
    values.set("t", "From draft");
    assert_eq!(draft_title(database, &values), Some("From draft".to_string()));

    // Empty text is treated as no title.
    let mut empty = PropertyMap::new();
    empty.set("t", "");
    assert_eq!(draft_title(database, &empty), None);

    // A database without a title property yields no title at all.
    let no_title = Database::new("db-3", "Untitlable");
    assert_eq!(draft_title(&no_title, &values), None);
}
