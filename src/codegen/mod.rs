//! C code generation for the asset table.
//!
//! # Module Structure
//!
//! - `bytes` - byte array initializer encoding
//! - `source` - the generated `.c` file
//! - `header` - the companion `.h` declaring `web_assets_get`
//! - `template` - fixed C text with typed placeholders
//! - `write` - writing output files

mod bytes;
mod header;
mod source;
mod template;
mod write;

pub use bytes::encode_bytes;
pub use header::{include_guard_for, render_header};
pub use source::{DEFAULT_HEADER_INCLUDE, SourceOptions, render_source};
pub use write::write_output;
