use crate::color::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of a database property.
///
/// Closed over the kinds folio renders specially; every other raw kind
/// string round-trips through `Other` and renders as a plain text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
    Number,
    Date,
    Checkbox,
    Select,
    Status,
    MultiSelect,
    Relation,
    People,
    Formula,
    Url,
    Email,
    PhoneNumber,
    Other(String),
}

impl PropertyKind {
    /// The raw kind string as it appears in a snapshot.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyKind::Title => "title",
            PropertyKind::RichText => "rich_text",
            PropertyKind::Number => "number",
            PropertyKind::Date => "date",
            PropertyKind::Checkbox => "checkbox",
            PropertyKind::Select => "select",
            PropertyKind::Status => "status",
            PropertyKind::MultiSelect => "multi_select",
            PropertyKind::Relation => "relation",
            PropertyKind::People => "people",
            PropertyKind::Formula => "formula",
            PropertyKind::Url => "url",
            PropertyKind::Email => "email",
            PropertyKind::PhoneNumber => "phone_number",
            PropertyKind::Other(raw) => raw,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "title" => PropertyKind::Title,
            "rich_text" => PropertyKind::RichText,
            "number" => PropertyKind::Number,
            "date" => PropertyKind::Date,
            "checkbox" => PropertyKind::Checkbox,
            "select" => PropertyKind::Select,
            "status" => PropertyKind::Status,
            "multi_select" => PropertyKind::MultiSelect,
            "relation" => PropertyKind::Relation,
            "people" => PropertyKind::People,
            "formula" => PropertyKind::Formula,
            "url" => PropertyKind::Url,
            "email" => PropertyKind::Email,
            "phone_number" => PropertyKind::PhoneNumber,
            other => PropertyKind::Other(other.to_string()),
        }
    }
}

impl From<&str> for PropertyKind {
    fn from(name: &str) -> Self {
        PropertyKind::from_name(name)
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PropertyKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(PropertyKind::from_name(&name))
    }
}

/// One selectable value of a select/status/multi-select property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: String,
}

/// A typed property of a database.
///
/// Type-specific configuration lives under the kind-named key, as in the
/// source system; the accessors below are shape-checked so a mismatched
/// config block is ignored rather than misread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<SelectConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SelectConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_select: Option<SelectConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationConfig>,
}

impl DatabaseProperty {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            select: None,
            status: None,
            multi_select: None,
            relation: None,
        }
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        let config = SelectConfig { options };
        match self.kind {
            PropertyKind::Select => self.select = Some(config),
            PropertyKind::Status => self.status = Some(config),
            PropertyKind::MultiSelect => self.multi_select = Some(config),
            _ => {}
        }
        self
    }

    pub fn with_relation(mut self, database_id: impl Into<String>) -> Self {
        self.relation = Some(RelationConfig { database_id: database_id.into() });
        self
    }

    /// Configured options, when this property's kind carries them.
    pub fn select_options(&self) -> &[SelectOption] {
        let config = match self.kind {
            PropertyKind::Select => self.select.as_ref(),
            PropertyKind::Status => self.status.as_ref(),
            PropertyKind::MultiSelect => self.multi_select.as_ref(),
            _ => None,
        };
        config.map(|c| c.options.as_slice()).unwrap_or_default()
    }

    /// The related database id, for relation properties.
    pub fn relation_database_id(&self) -> Option<&str> {
        match self.kind {
            PropertyKind::Relation => self.relation.as_ref().map(|r| r.database_id.as_str()),
            _ => None,
        }
    }
}
