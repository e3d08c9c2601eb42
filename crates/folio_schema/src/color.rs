use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic color of a select/status/multi-select option.
///
/// The set is closed; snapshots carry the lowercase name and unknown names
/// fall back to `Default` instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "gray" => Color::Gray,
            "brown" => Color::Brown,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "purple" => Color::Purple,
            "pink" => Color::Pink,
            "red" => Color::Red,
            _ => Color::Default,
        }
    }

    /// Display tint as a CSS color.
    pub fn tint(&self) -> &'static str {
        match self {
            Color::Default => "#37352f",
            Color::Gray => "#9b9a97",
            Color::Brown => "#64473a",
            Color::Orange => "#d9730d",
            Color::Yellow => "#dfab01",
            Color::Green => "#0f7b6c",
            Color::Blue => "#0b6e99",
            Color::Purple => "#6940a5",
            Color::Pink => "#ad1a72",
            Color::Red => "#e03e3e",
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Color::from_name(&name))
    }
}
