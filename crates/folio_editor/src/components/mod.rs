pub mod menu_bar;
pub mod workspace_explorer;

pub use menu_bar::MenuBar;
pub use workspace_explorer::WorkspaceExplorer;
