use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

use folio_ui::{FormMode, PageForm};

mod app_state;
mod components;

use app_state::AppState;
use components::*;

fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("folio Editor")
            .with_resizable(true),
    );

    LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    // Initialize app state
    use_context_provider(AppState::new);

    let state = use_context::<AppState>();
    let selected_database = state.selected_database.read().clone();
    let selected_page = state.selected_page.read().clone();
    let form_seq = *state.form_seq.read();
    let status = state.status.read().clone();

    rsx! {
        div {
            style: "width: 100vw; height: 100vh; display: flex; flex-direction: column; font-family: 'Segoe UI', Arial, sans-serif; font-size: 13px;",

            // Menu Bar
            MenuBar {}

            // Main Content Area
            div {
                style: "flex: 1; display: flex; overflow: hidden;",

                // Left Sidebar - Workspace Explorer
                WorkspaceExplorer {}

                // Central Area - Page Form
                div {
                    style: "flex: 1; display: flex; flex-direction: column; overflow-y: auto; background: #ffffff;",
                    {
                        let workspace = state.workspace.read();
                        match (workspace.as_ref(), selected_database.as_deref()) {
                            (Some(ws), Some(database_id)) => {
                                if let Some(database) = ws.get_database(database_id) {
                                    let mode = selected_page
                                        .as_deref()
                                        .and_then(|page_id| ws.get_page(page_id))
                                        .cloned()
                                        .map(FormMode::Edit)
                                        .unwrap_or(FormMode::Create);
                                    let form_key = format!(
                                        "{}:{}:{}",
                                        database.id,
                                        selected_page.clone().unwrap_or_default(),
                                        form_seq,
                                    );
                                    let database = database.clone();
                                    let users = ws.users.clone();
                                    let relation_pages = ws.relation_pages();
                                    let submit_database = database.id.clone();
                                    let submit_page = selected_page.clone();
                                    rsx! {
                                        PageForm {
                                            key: "{form_key}",
                                            database,
                                            users,
                                            relation_pages,
                                            mode,
                                            on_submit: move |values| {
                                                state.apply_draft(&submit_database, submit_page.as_deref(), values);
                                            },
                                            on_cancel: move |_| state.discard_edits(),
                                        }
                                    }
                                } else {
                                    rsx! {
                                        div { style: "padding: 16px; color: #999;", "Select a database in the explorer" }
                                    }
                                }
                            }
                            (Some(_), None) => rsx! {
                                div { style: "padding: 16px; color: #999;", "Select a database in the explorer" }
                            },
                            (None, _) => rsx! {
                                div { style: "padding: 16px; color: #999;", "Open a workspace snapshot (File > Open Snapshot...)" }
                            },
                        }
                    }
                }
            }

            // Status Bar
            div {
                style: "padding: 4px 12px; background: #f0f0f0; border-top: 1px solid #ccc; font-size: 12px; color: #333;",
                "{status}"
            }
        }
    }
}
