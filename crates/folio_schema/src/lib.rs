pub mod color;
pub mod property;
pub mod page;
pub mod value;
pub mod workspace;
pub mod snapshot;
pub mod errors;

pub use color::*;
pub use property::*;
pub use page::*;
pub use value::*;
pub use workspace::*;
pub use snapshot::*;
pub use errors::*;
