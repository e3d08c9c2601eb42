use crate::app_state::AppState;
use dioxus::prelude::*;

#[component]
pub fn MenuBar() -> Element {
    let state = use_context::<AppState>();
    let mut active_menu = use_signal(|| None::<String>);

    let menu_item_style = "padding: 4px 12px; cursor: pointer; position: relative; user-select: none;";
    let dropdown_style = "
        position: absolute;
        top: 100%;
        left: 0;
        background: white;
        border: 1px solid #ccc;
        box-shadow: 2px 2px 5px rgba(0,0,0,0.2);
        min-width: 170px;
        z-index: 1001;
    ";
    let dropdown_item_style = "padding: 6px 12px; cursor: pointer; &:hover { background: #f0f0f0; }";

    // Helper to close menu
    let mut close_menu = move || active_menu.set(None);

    rsx! {
        div {
            class: "menu-bar",
            style: "display: flex; background: #f0f0f0; border-bottom: 1px solid #ccc; padding: 4px 8px;",

            // File Menu
            div {
                style: "{menu_item_style}",
                onclick: move |_| {
                    if *active_menu.read() == Some("File".to_string()) {
                        active_menu.set(None);
                    } else {
                        active_menu.set(Some("File".to_string()));
                    }
                },
                "File"
                if *active_menu.read() == Some("File".to_string()) {
                    div {
                        style: "{dropdown_style}",
                        onclick: move |evt| evt.stop_propagation(), // Prevent closing when clicking dropdown bg

                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.open_snapshot_dialog();
                                close_menu();
                            },
                            "Open Snapshot..."
                        }
                        div { style: "height: 1px; background: #eee; margin: 2px 0;" }
                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.save_snapshot();
                                close_menu();
                            },
                            "Save Snapshot"
                        }
                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.save_snapshot_as();
                                close_menu();
                            },
                            "Save Snapshot As..."
                        }
                        div { style: "height: 1px; background: #eee; margin: 2px 0;" }
                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| -> () { std::process::exit(0); },
                            "Exit"
                        }
                    }
                }
            }

            // Page Menu
            div {
                style: "{menu_item_style}",
                onclick: move |_| {
                    if *active_menu.read() == Some("Page".to_string()) {
                        active_menu.set(None);
                    } else {
                        active_menu.set(Some("Page".to_string()));
                    }
                },
                "Page"
                if *active_menu.read() == Some("Page".to_string()) {
                    div {
                        style: "{dropdown_style}",
                        onclick: move |evt| evt.stop_propagation(),

                        {
                            let has_database = state.selected_database.read().is_some();
                            let disabled_style = "padding: 6px 12px; color: #999; cursor: default;";
                            let enabled_style = dropdown_item_style;
                            rsx! {
                                div {
                                    style: if has_database { enabled_style } else { disabled_style },
                                    onclick: move |_| {
                                        state.new_page();
                                        close_menu();
                                    },
                                    "New Page"
                                }
                                div {
                                    style: if has_database { enabled_style } else { disabled_style },
                                    onclick: move |_| {
                                        state.discard_edits();
                                        close_menu();
                                    },
                                    "Discard Changes"
                                }
                            }
                        }
                    }
                }
            }

            // Close menu when clicking outside (transparent overlay under the
            // dropdown but over the rest of the window).
            if active_menu.read().is_some() {
                div {
                    style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 1000; cursor: default;",
                    onclick: move |_| active_menu.set(None)
                }
            }
        }
    }
}
