//! Instance input and output.
//!
//! - [`parse_instance`] / [`read_instance`] — text layout `n`, `p`, n×n matrix
//! - [`write_instance`] / [`save_instance`] — the same layout back out
//! - [`generate_instance`] — random symmetric instances with integer distances

mod generator;
mod reader;
mod writer;

pub use generator::generate_instance;
pub use reader::{parse_instance, read_instance};
pub use writer::{save_instance, write_instance};
