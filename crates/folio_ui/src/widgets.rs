// Form input widgets. Each one renders a single database property and
// reports edits through an `EventHandler<PropertyValue>`.

use chrono::NaiveDate;
use dioxus::prelude::*;

use folio_forms::{EntryIcon, FieldBinding, SelectEntry};
use folio_schema::PropertyValue;

const FIELD_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; margin-bottom: 14px;";
const LABEL_STYLE: &str = "font-size: 12px; font-weight: 600; color: #374151;";
const INPUT_STYLE: &str = "padding: 6px 8px; border: 1px solid #cbd5e1; border-radius: 6px; background: #f8fafc; font-size: 13px;";
const ERROR_STYLE: &str = "font-size: 11px; color: #e74856;";
const HINT_STYLE: &str = "font-size: 11px; color: #64748b;";

/// Small icon shown next to a selectable entry: an avatar, a page glyph
/// or a tinted color dot.
#[derive(Props, PartialEq, Clone)]
pub struct EntryIconViewProps {
    pub icon: EntryIcon,
}

#[allow(non_snake_case)]
pub fn EntryIconView(props: EntryIconViewProps) -> Element {
    match props.icon {
        EntryIcon::Avatar(url) => rsx! {
            img {
                src: "{url}",
                style: "width: 16px; height: 16px; border-radius: 50%; object-fit: cover;",
            }
        },
        EntryIcon::Image(url) => rsx! {
            img {
                src: "{url}",
                style: "width: 16px; height: 16px; border-radius: 3px; object-fit: cover;",
            }
        },
        EntryIcon::Emoji(emoji) => rsx! {
            span { style: "font-size: 14px;", "{emoji}" }
        },
        EntryIcon::Dot(tint) => rsx! {
            span {
                style: "width: 10px; height: 10px; border-radius: 50%; display: inline-block; background: {tint};",
            }
        },
        EntryIcon::Document => rsx! {
            span { style: "font-size: 13px;", "\u{1F4C4}" }
        },
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DateFieldProps {
    pub title: String,
    pub binding: FieldBinding,
    pub on_change: EventHandler<PropertyValue>,
}

#[allow(non_snake_case)]
pub fn DateField(props: DateFieldProps) -> Element {
    let on_change = props.on_change;
    let current = props.binding.value.as_date().flatten();
    let text = current
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx! {
        div { style: FIELD_STYLE,
            label { style: LABEL_STYLE, "{props.title}" }
            input {
                r#type: "date",
                style: INPUT_STYLE,
                value: "{text}",
                oninput: move |evt| {
                    let parsed = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok();
                    on_change.call(PropertyValue::Date(parsed));
                },
            }
            if let Some(error) = &props.binding.error {
                div { style: ERROR_STYLE, "{error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxFieldProps {
    pub label: String,
    pub binding: FieldBinding,
    pub on_change: EventHandler<PropertyValue>,
}

#[allow(non_snake_case)]
pub fn CheckboxField(props: CheckboxFieldProps) -> Element {
    let on_change = props.on_change;
    let checked = props.binding.value.as_flag().unwrap_or(false);

    rsx! {
        div { style: FIELD_STYLE,
            div { style: "display: flex; align-items: center; gap: 6px;",
                input {
                    r#type: "checkbox",
                    checked: checked,
                    onclick: move |_| on_change.call(PropertyValue::Flag(!checked)),
                }
                label { style: LABEL_STYLE, "{props.label}" }
            }
            if let Some(error) = &props.binding.error {
                div { style: ERROR_STYLE, "{error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DropdownFieldProps {
    pub title: String,
    pub entries: Vec<SelectEntry>,
    pub binding: FieldBinding,
    pub on_change: EventHandler<PropertyValue>,
}

/// Single-choice dropdown. A leading blank option stands for "no value",
/// so clearing a select property is always possible.
#[allow(non_snake_case)]
pub fn DropdownField(props: DropdownFieldProps) -> Element {
    let on_change = props.on_change;
    let selected = props
        .binding
        .value
        .as_text()
        .unwrap_or_default()
        .to_string();
    let current_icon = props
        .entries
        .iter()
        .find(|entry| entry.value == selected)
        .and_then(|entry| entry.icon.clone());

    rsx! {
        div { style: FIELD_STYLE,
            label { style: LABEL_STYLE, "{props.title}" }
            div { style: "display: flex; align-items: center; gap: 6px;",
                if let Some(icon) = current_icon {
                    EntryIconView { icon }
                }
                select {
                    style: "{INPUT_STYLE} flex: 1;",
                    onchange: move |evt| on_change.call(PropertyValue::Text(evt.value())),
                    option { value: "", selected: selected.is_empty(), "" }
                    for entry in props.entries.iter() {
                        option {
                            key: "{entry.key}",
                            value: "{entry.value}",
                            selected: entry.value == selected,
                            "{entry.title}"
                        }
                    }
                }
            }
            if let Some(error) = &props.binding.error {
                div { style: ERROR_STYLE, "{error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TagPickerFieldProps {
    pub title: String,
    pub placeholder: String,
    pub entries: Vec<SelectEntry>,
    pub binding: FieldBinding,
    pub on_change: EventHandler<PropertyValue>,
}

/// Multi-choice picker. Selected entries appear as removable chips and
/// the remaining entries stay available in an "add" dropdown.
#[allow(non_snake_case)]
pub fn TagPickerField(props: TagPickerFieldProps) -> Element {
    let on_change = props.on_change;
    let selected: Vec<String> = props
        .binding
        .value
        .as_refs()
        .map(|ids| ids.to_vec())
        .unwrap_or_default();
    let remaining: Vec<SelectEntry> = props
        .entries
        .iter()
        .filter(|entry| !selected.contains(&entry.value))
        .cloned()
        .collect();

    rsx! {
        div { style: FIELD_STYLE,
            label { style: LABEL_STYLE, "{props.title}" }
            if !selected.is_empty() {
                div { style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for id in selected.clone() {
                        {
                            let entry = props.entries.iter().find(|e| e.value == id).cloned();
                            let chip_key = entry
                                .as_ref()
                                .map(|e| e.key.clone())
                                .unwrap_or_else(|| format!("option::{id}"));
                            let chip_title = entry
                                .as_ref()
                                .map(|e| e.title.clone())
                                .unwrap_or_else(|| id.clone());
                            let chip_icon = entry.as_ref().and_then(|e| e.icon.clone());
                            let kept: Vec<String> = selected
                                .iter()
                                .filter(|other| **other != id)
                                .cloned()
                                .collect();
                            rsx! {
                                span {
                                    key: "{chip_key}",
                                    style: "display: inline-flex; align-items: center; gap: 4px; padding: 2px 8px; border: 1px solid #cbd5e1; border-radius: 12px; background: #eef2ff; font-size: 12px;",
                                    if let Some(icon) = chip_icon {
                                        EntryIconView { icon }
                                    }
                                    span { "{chip_title}" }
                                    button {
                                        style: "border: none; background: none; cursor: pointer; color: #64748b; padding: 0 2px;",
                                        onclick: move |_| on_change.call(PropertyValue::Refs(kept.clone())),
                                        "\u{00d7}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if remaining.is_empty() {
                if selected.is_empty() {
                    div { style: HINT_STYLE, "{props.placeholder}" }
                }
            } else {
                {
                    let current = selected.clone();
                    rsx! {
                        select {
                            style: INPUT_STYLE,
                            value: "",
                            onchange: move |evt| {
                                let picked = evt.value();
                                if picked.is_empty() {
                                    return;
                                }
                                let mut ids = current.clone();
                                ids.push(picked);
                                on_change.call(PropertyValue::Refs(ids));
                            },
                            option { value: "", selected: true, "{props.placeholder}" }
                            for entry in remaining.iter() {
                                option { key: "{entry.key}", value: "{entry.value}", "{entry.title}" }
                            }
                        }
                    }
                }
            }
            if let Some(error) = &props.binding.error {
                div { style: ERROR_STYLE, "{error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextFieldProps {
    pub title: String,
    pub placeholder: String,
    pub info: String,
    pub binding: FieldBinding,
    pub on_change: EventHandler<PropertyValue>,
}

#[allow(non_snake_case)]
pub fn TextField(props: TextFieldProps) -> Element {
    let on_change = props.on_change;
    let text = props
        .binding
        .value
        .as_text()
        .unwrap_or_default()
        .to_string();

    rsx! {
        div { style: FIELD_STYLE,
            label { style: LABEL_STYLE, "{props.title}" }
            input {
                r#type: "text",
                style: INPUT_STYLE,
                placeholder: "{props.placeholder}",
                value: "{text}",
                oninput: move |evt| on_change.call(PropertyValue::Text(evt.value())),
            }
            div { style: HINT_STYLE, "{props.info}" }
            if let Some(error) = &props.binding.error {
                div { style: ERROR_STYLE, "{error}" }
            }
        }
    }
}
