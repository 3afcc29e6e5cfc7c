pub mod value;

pub use value::{format_timestamp, format_value, truncate_value};
