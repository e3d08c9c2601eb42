use crate::page::{Page, PageIcon};
use crate::property::{DatabaseProperty, PropertyKind};
use crate::value::PropertyMap;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A database: a titled collection of typed properties whose rows are pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PageIcon>,
    #[serde(default)]
    pub properties: Vec<DatabaseProperty>,
}

impl Database {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            properties: Vec::new(),
        }
    }

    pub fn add_property(&mut self, property: DatabaseProperty) {
        self.properties.push(property);
    }

    pub fn get_property(&self, id: &str) -> Option<&DatabaseProperty> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// The property pages of this database are titled by, if any.
    pub fn title_property(&self) -> Option<&DatabaseProperty> {
        self.properties.iter().find(|p| p.kind == PropertyKind::Title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceMeta {
    #[serde(default)]
    pub name: String,
}

/// The in-memory form of a snapshot: every record the forms render from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(rename = "workspace", default)]
    pub meta: WorkspaceMeta,
    #[serde(default)]
    pub databases: Vec<Database>,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub users: Vec<crate::page::User>,
}

impl Workspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: WorkspaceMeta { name: name.into() },
            databases: Vec::new(),
            pages: Vec::new(),
            users: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn get_database(&self, id: &str) -> Option<&Database> {
        self.databases.iter().find(|d| d.id == id)
    }

    pub fn get_page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn get_page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Pages belonging to one database, in snapshot order.
    pub fn pages_of(&self, database_id: &str) -> Vec<&Page> {
        self.pages
            .iter()
            .filter(|p| p.parent_database_id.as_deref() == Some(database_id))
            .collect()
    }

    /// All pages grouped by their parent database id, for relation fields.
    /// Databases with no pages simply have no entry.
    pub fn relation_pages(&self) -> HashMap<String, Vec<Page>> {
        let mut grouped: HashMap<String, Vec<Page>> = HashMap::new();
        for page in &self.pages {
            if let Some(db_id) = &page.parent_database_id {
                grouped.entry(db_id.clone()).or_default().push(page.clone());
            }
        }
        grouped
    }

    /// Apply an edited value set to a page, creating it when `page_id` is
    /// `None`. Returns the id of the touched page, or `None` when the
    /// database is unknown.
    pub fn apply_draft(
        &mut self,
        database_id: &str,
        page_id: Option<&str>,
        values: PropertyMap,
    ) -> Option<String> {
        let database = self.get_database(database_id)?.clone();
        let title = draft_title(&database, &values);
        let now = Utc::now();

        if let Some(id) = page_id {
            let page = self.get_page_mut(id)?;
            page.properties = values;
            page.title = title;
            page.last_edited_time = Some(now);
            return Some(id.to_string());
        }

        let mut page = Page::new(Uuid::new_v4().to_string());
        page.title = title;
        page.parent_database_id = Some(database_id.to_string());
        page.last_edited_time = Some(now);
        page.properties = values;
        let id = page.id.clone();
        self.pages.push(page);
        Some(id)
    }
}

/// Extract a page title from a draft: the text bound to the database's
/// title property, when present and non-empty.
pub fn draft_title(database: &Database, values: &PropertyMap) -> Option<String> {
    let title_prop = database.title_property()?;
    match values.get_text(&title_prop.id) {
        Some(t) if !t.is_empty() => Some(t.to_string()),
        _ => None,
    }
}
