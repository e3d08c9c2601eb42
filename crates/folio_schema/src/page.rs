use crate::value::PropertyMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
}

/// Icon metadata attached to a page or database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageIcon {
    Emoji { emoji: String },
    External { external: ExternalFile },
    File { file: HostedFile },
}

/// What a page icon resolves to for display.
#[derive(Debug, Clone, PartialEq)]
pub enum PageGlyph {
    Emoji(String),
    Image(String),
    /// The blank-document fallback when no icon is set.
    Document,
}

fn default_page_object() -> String {
    "page".to_string()
}

/// A record in a database: one row, with its stored property values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default = "default_page_object")]
    pub object: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PageIcon>,
    #[serde(default)]
    pub parent_database_id: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: default_page_object(),
            title: None,
            icon: None,
            parent_database_id: None,
            last_edited_time: None,
            properties: PropertyMap::new(),
        }
    }

    /// Display icon for the page; defaults to the document glyph.
    pub fn glyph(&self) -> PageGlyph {
        match &self.icon {
            Some(PageIcon::Emoji { emoji }) => PageGlyph::Emoji(emoji.clone()),
            Some(PageIcon::External { external }) => PageGlyph::Image(external.url.clone()),
            Some(PageIcon::File { file }) => PageGlyph::Image(file.url.clone()),
            None => PageGlyph::Document,
        }
    }

    /// Display title; pages without one show as "Untitled".
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    #[default]
    Person,
    Bot,
}

/// A workspace member, used as the option set for people properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: UserKind,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            avatar_url: None,
            kind: UserKind::Person,
        }
    }
}
