pub mod widgets;
pub mod page_form;
pub mod runner;

pub use page_form::*;
pub use widgets::*;
pub use runner::run;
