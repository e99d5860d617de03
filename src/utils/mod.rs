pub mod string;

pub use string::{single_line, truncate_string};
