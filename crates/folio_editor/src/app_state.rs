// App state management using Dioxus signals
use dioxus::prelude::*;
use folio_schema::{load_snapshot, PropertyMap, Workspace};
use rfd::FileDialog;
use std::path::PathBuf;

#[derive(Clone, Copy)]
pub struct AppState {
    pub workspace: Signal<Option<Workspace>>,
    pub snapshot_path: Signal<Option<PathBuf>>,
    pub selected_database: Signal<Option<String>>,
    /// `None` while a database is selected means the central form creates
    /// a new page.
    pub selected_page: Signal<Option<String>>,
    /// Bumped whenever the central form should reseed from scratch.
    pub form_seq: Signal<usize>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workspace: Signal::new(None),
            snapshot_path: Signal::new(None),
            selected_database: Signal::new(None),
            selected_page: Signal::new(None),
            form_seq: Signal::new(0),
            status: Signal::new("Open a workspace snapshot to begin".to_string()),
        }
    }

    pub fn set_status(&self, message: impl Into<String>) {
        let mut status = self.status;
        status.set(message.into());
    }

    fn reseed_form(&self) {
        let mut seq = self.form_seq;
        seq += 1;
    }

    pub fn open_snapshot_dialog(&self) {
        if let Some(path) = FileDialog::new()
            .add_filter("Workspace Snapshot", &["json"])
            .pick_file()
        {
            match load_snapshot(&path) {
                Ok(workspace) => {
                    let first_database = workspace.databases.first().map(|db| db.id.clone());
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string());

                    let mut workspace_signal = self.workspace;
                    workspace_signal.set(Some(workspace));
                    let mut database_signal = self.selected_database;
                    database_signal.set(first_database);
                    let mut page_signal = self.selected_page;
                    page_signal.set(None);
                    let mut path_signal = self.snapshot_path;
                    path_signal.set(Some(path));

                    self.reseed_form();
                    self.set_status(format!("Opened {file_name}"));
                }
                Err(e) => {
                    tracing::error!("failed to load snapshot: {e}");
                    self.set_status(format!("Failed to open snapshot: {e}"));
                }
            }
        }
    }

    pub fn save_snapshot(&self) {
        let workspace_read = self.workspace.read();
        let Some(workspace) = workspace_read.as_ref() else {
            return;
        };
        let current_path = self.snapshot_path.read().clone();

        if let Some(path) = current_path {
            match folio_schema::save_snapshot(workspace, &path) {
                Ok(()) => self.set_status(format!("Saved {}", path.display())),
                Err(e) => {
                    tracing::error!("failed to save snapshot: {e}");
                    self.set_status(format!("Failed to save snapshot: {e}"));
                }
            }
        } else {
            self.save_snapshot_as();
        }
    }

    pub fn save_snapshot_as(&self) {
        let workspace_read = self.workspace.read();
        let Some(workspace) = workspace_read.as_ref() else {
            return;
        };

        let default_name = if workspace.name().is_empty() {
            "workspace".to_string()
        } else {
            workspace.name().to_string()
        };

        if let Some(path) = FileDialog::new()
            .set_file_name(&format!("{default_name}.json"))
            .add_filter("Workspace Snapshot", &["json"])
            .save_file()
        {
            if let Err(e) = folio_schema::save_snapshot(workspace, &path) {
                tracing::error!("failed to save snapshot: {e}");
                self.set_status(format!("Failed to save snapshot: {e}"));
                return;
            }
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            let mut path_signal = self.snapshot_path;
            path_signal.set(Some(path));
            self.set_status(format!("Saved {file_name}"));
        }
    }

    pub fn select_database(&self, database_id: String) {
        let mut database_signal = self.selected_database;
        database_signal.set(Some(database_id));
        let mut page_signal = self.selected_page;
        page_signal.set(None);
        self.reseed_form();
    }

    pub fn select_page(&self, database_id: String, page_id: String) {
        let mut database_signal = self.selected_database;
        database_signal.set(Some(database_id));
        let mut page_signal = self.selected_page;
        page_signal.set(Some(page_id));
    }

    pub fn new_page(&self) {
        let mut page_signal = self.selected_page;
        page_signal.set(None);
        self.reseed_form();
    }

    /// Throw away unsaved field edits by reseeding the central form.
    pub fn discard_edits(&self) {
        self.reseed_form();
        self.set_status("Changes discarded");
    }

    /// Apply a submitted value set to the workspace; creates a page when
    /// `page_id` is `None`. Saves the snapshot in place when its path is
    /// known.
    pub fn apply_draft(&self, database_id: &str, page_id: Option<&str>, values: PropertyMap) {
        let mut workspace_signal = self.workspace;
        let touched = {
            let mut workspace_write = workspace_signal.write();
            match workspace_write.as_mut() {
                Some(ws) => ws.apply_draft(database_id, page_id, values),
                None => None,
            }
        };

        let Some(touched_id) = touched else {
            self.set_status("Database not found in snapshot");
            return;
        };

        let title = self
            .workspace
            .read()
            .as_ref()
            .and_then(|ws| ws.get_page(&touched_id))
            .map(|p| p.display_title().to_string())
            .unwrap_or_default();
        let verb = if page_id.is_some() { "Saved" } else { "Created" };

        let mut page_signal = self.selected_page;
        page_signal.set(Some(touched_id));

        let current_path = self.snapshot_path.read().clone();
        if let Some(path) = current_path {
            let workspace_read = self.workspace.read();
            let Some(workspace) = workspace_read.as_ref() else {
                return;
            };
            match folio_schema::save_snapshot(workspace, &path) {
                Ok(()) => self.set_status(format!("{verb} \"{title}\" - snapshot saved")),
                Err(e) => {
                    tracing::error!("failed to save snapshot: {e}");
                    self.set_status(format!("{verb} \"{title}\" - save failed: {e}"));
                }
            }
        } else {
            self.set_status(format!("{verb} \"{title}\" - File > Save Snapshot to persist"));
        }
    }
}
