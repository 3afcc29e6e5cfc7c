pub mod error;
pub mod task;
pub mod value;

pub use error::{Error, Result};
pub use task::*;
pub use value::*;
