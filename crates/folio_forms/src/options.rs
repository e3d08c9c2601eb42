use folio_schema::{Page, PageGlyph, SelectOption, User};

/// One member of an option list, resolved by the dispatcher before it
/// reaches the mapper: a configured select option, a related page, or a
/// workspace user.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Select(&'a SelectOption),
    Page(&'a Page),
    User(&'a User),
}

/// Icon of a selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryIcon {
    /// User avatar, rendered as a circular image.
    Avatar(String),
    Emoji(String),
    Image(String),
    /// Colored dot; the payload is the CSS tint.
    Dot(&'static str),
    /// The blank-document glyph of an icon-less page.
    Document,
}

impl From<PageGlyph> for EntryIcon {
    fn from(glyph: PageGlyph) -> Self {
        match glyph {
            PageGlyph::Emoji(emoji) => EntryIcon::Emoji(emoji),
            PageGlyph::Image(url) => EntryIcon::Image(url),
            PageGlyph::Document => EntryIcon::Document,
        }
    }
}

/// One selectable entry of a dropdown or tag picker.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectEntry {
    /// Render key, namespaced so it cannot collide with other key spaces
    /// in the same list.
    pub key: String,
    /// The id submitted when the entry is chosen.
    pub value: String,
    pub title: String,
    pub icon: Option<EntryIcon>,
}

fn entry(id: &str, title: Option<String>, icon: Option<EntryIcon>) -> SelectEntry {
    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => "Untitled".to_string(),
    };
    SelectEntry {
        key: format!("option::{id}"),
        value: id.to_string(),
        title,
        icon,
    }
}

/// Map one candidate into a selectable entry.
///
/// Candidates without an id are dropped; every other degenerate shape
/// (missing title, missing avatar, missing color) degrades to a plainer
/// entry instead of failing.
pub fn to_entry(candidate: Candidate<'_>) -> Option<SelectEntry> {
    match candidate {
        Candidate::Select(option) => {
            if option.id.is_empty() {
                return None;
            }
            let icon = option.color.map(|c| EntryIcon::Dot(c.tint()));
            Some(entry(&option.id, Some(option.name.clone()), icon))
        }
        Candidate::Page(page) => {
            if page.id.is_empty() {
                return None;
            }
            Some(entry(&page.id, page.title.clone(), Some(page.glyph().into())))
        }
        Candidate::User(user) => {
            if user.id.is_empty() {
                return None;
            }
            let icon = user.avatar_url.clone().map(EntryIcon::Avatar);
            Some(entry(&user.id, user.name.clone(), icon))
        }
    }
}

/// Entries for a configured option list. Order-preserving; no dedup
/// beyond the id filter.
pub fn select_entries(options: &[SelectOption]) -> Vec<SelectEntry> {
    options.iter().filter_map(|o| to_entry(Candidate::Select(o))).collect()
}

/// Entries for a list of related pages.
pub fn page_entries(pages: &[Page]) -> Vec<SelectEntry> {
    pages.iter().filter_map(|p| to_entry(Candidate::Page(p))).collect()
}

/// Entries for the workspace user list.
pub fn user_entries(users: &[User]) -> Vec<SelectEntry> {
    users.iter().filter_map(|u| to_entry(Candidate::User(u))).collect()
}
