pub mod binding;
pub mod dispatch;
pub mod options;
pub mod form_state;

pub use binding::*;
pub use dispatch::*;
pub use options::*;
pub use form_state::*;
