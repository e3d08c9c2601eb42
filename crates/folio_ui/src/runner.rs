use std::path::{Path, PathBuf};

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

use folio_schema::{load_snapshot, save_snapshot, Workspace};

use crate::{FormMode, PageForm};

// ---------------------------------------------------------------------------
// Thread-locals used to pass the Workspace into the named Dioxus App
// component. (Dioxus `launch()` requires a plain fn-pointer, so we can't
// use a closure.)
// ---------------------------------------------------------------------------
thread_local! {
    static LAUNCH_WORKSPACE: std::cell::RefCell<Option<Workspace>> = std::cell::RefCell::new(None);
    static LAUNCH_PATH: std::cell::RefCell<Option<PathBuf>> = std::cell::RefCell::new(None);
}

// ---------------------------------------------------------------------------
// Public entry point – the ONLY function the shell binary calls.
// ---------------------------------------------------------------------------

/// Open a workspace snapshot as a quick-entry window: a create form for
/// the snapshot's first database. Every submit appends a page and saves
/// the snapshot back to disk.
pub fn run(path: &Path) {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext != "json" {
        eprintln!("Error: unsupported file type '.{ext}'. Expected .json");
        std::process::exit(1);
    }

    let workspace = match load_snapshot(path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error loading snapshot: {e}");
            std::process::exit(1);
        }
    };

    if workspace.databases.is_empty() {
        eprintln!("Error: snapshot has no databases");
        std::process::exit(1);
    }

    let title = if workspace.name().is_empty() {
        "folio Quick Entry".to_string()
    } else {
        format!("folio Quick Entry - {}", workspace.name())
    };

    LAUNCH_WORKSPACE.with(|cell| *cell.borrow_mut() = Some(workspace));
    LAUNCH_PATH.with(|cell| *cell.borrow_mut() = Some(path.to_path_buf()));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_resizable(true),
    );

    LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(QuickEntryApp);
}

/// Top-level Dioxus component for the quick-entry shell.
#[component]
fn QuickEntryApp() -> Element {
    let initial = LAUNCH_WORKSPACE
        .with(|cell| cell.borrow().clone())
        .expect("LAUNCH_WORKSPACE must be set before launching");
    let path = LAUNCH_PATH
        .with(|cell| cell.borrow().clone())
        .expect("LAUNCH_PATH must be set before launching");

    let mut workspace = use_signal(move || initial);
    let mut status = use_signal(String::new);
    // Bumped after every created page so the form reseeds to blank values.
    let mut entry_seq = use_signal(|| 0usize);

    let database = workspace.read().databases.first().cloned();
    let users = workspace.read().users.clone();
    let relation_pages = workspace.read().relation_pages();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: 'Segoe UI', sans-serif; background: #ffffff;",
            if let Some(database) = database {
                {
                    let database_id = database.id.clone();
                    let save_path = path.clone();
                    rsx! {
                        div { style: "flex: 1; overflow-y: auto;",
                            PageForm {
                                key: "{entry_seq}",
                                database: database.clone(),
                                users: users.clone(),
                                relation_pages: relation_pages.clone(),
                                mode: FormMode::Create,
                                on_submit: move |values| {
                                    let created = workspace.write().apply_draft(&database_id, None, values);
                                    match created {
                                        Some(page_id) => {
                                            let title = workspace
                                                .read()
                                                .get_page(&page_id)
                                                .map(|p| p.display_title().to_string())
                                                .unwrap_or_default();
                                            let saved = save_snapshot(&workspace.read(), &save_path);
                                            match saved {
                                                Ok(()) => status.set(format!("Created \"{title}\" - snapshot saved")),
                                                Err(e) => {
                                                    eprintln!("Failed to save snapshot: {e}");
                                                    status.set(format!("Created \"{title}\" - save failed: {e}"));
                                                }
                                            }
                                            entry_seq += 1;
                                        }
                                        None => status.set("Database not found in snapshot".to_string()),
                                    }
                                },
                                on_cancel: move |_| -> () {
                                    std::process::exit(0);
                                },
                            }
                        }
                    }
                }
            } else {
                div { style: "padding: 16px; color: #64748b;", "Snapshot has no databases" }
            }
            if !status.read().is_empty() {
                div {
                    style: "padding: 6px 16px; border-top: 1px solid #e2e8f0; background: #f8fafc; font-size: 12px; color: #334155;",
                    "{status}"
                }
            }
        }
    }
}
