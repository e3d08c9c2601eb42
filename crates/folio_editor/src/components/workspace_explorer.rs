use crate::app_state::AppState;
use dioxus::prelude::*;

#[component]
pub fn WorkspaceExplorer() -> Element {
    let state = use_context::<AppState>();
    let workspace = state.workspace.read();
    let selected_database = state.selected_database.read().clone();
    let selected_page = state.selected_page.read().clone();

    rsx! {
        div {
            class: "workspace-explorer",
            style: "width: 220px; background: #fafafa; border-right: 1px solid #ccc; padding: 8px; overflow-y: auto;",

            h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "Workspace" }

            div {
                style: "border-top: 1px solid #ccc; padding-top: 8px;",

                {
                    if let Some(ws) = workspace.as_ref() {
                        rsx! {
                            div {
                                style: "font-weight: bold; margin-bottom: 8px;",
                                "\u{1F4C1} {ws.name()}"
                            }

                            div {
                                style: "margin-left: 8px;",

                                for database in &ws.databases {
                                    {
                                        let database_id = database.id.clone();
                                        let database_selected =
                                            selected_database.as_deref() == Some(database.id.as_str());
                                        let database_bg = if database_selected && selected_page.is_none() {
                                            "#e3f2fd"
                                        } else {
                                            "transparent"
                                        };
                                        let pages = ws.pages_of(&database.id);

                                        rsx! {
                                            div {
                                                key: "{database.id}",

                                                div {
                                                    style: "font-weight: bold; padding: 4px 8px; cursor: pointer; background: {database_bg}; border-radius: 3px; margin-bottom: 2px;",
                                                    onclick: move |_| state.select_database(database_id.clone()),
                                                    "\u{1F4CB} {database.title}"
                                                }

                                                div {
                                                    style: "margin-left: 16px;",
                                                    for page in pages {
                                                        {
                                                            let page_id = page.id.clone();
                                                            let page_database = database.id.clone();
                                                            let title = page.display_title().to_string();
                                                            let page_selected = database_selected
                                                                && selected_page.as_deref() == Some(page.id.as_str());
                                                            let page_bg = if page_selected { "#e3f2fd" } else { "transparent" };

                                                            rsx! {
                                                                div {
                                                                    key: "{page_id}",
                                                                    style: "padding: 4px 8px; cursor: pointer; background: {page_bg}; border-radius: 3px; margin-bottom: 2px;",
                                                                    onclick: move |_| state.select_page(page_database.clone(), page_id.clone()),
                                                                    "\u{1F4C4} {title}"
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        rsx! {
                            div {
                                style: "color: #999; font-style: italic;",
                                "No snapshot loaded"
                            }
                        }
                    }
                }
            }
        }
    }
}
