//! Asset scanning, metadata and the route table.

mod error;
mod ident;
mod meta;
mod route;
mod scan;
mod table;

/// The one file every bundle must contain; it also answers `/`.
pub const INDEX_FILE: &str = "index.html";

// Types
pub use error::BundleError;
pub use meta::Asset;
pub use table::AssetTable;

// Scanning (read-only)
pub use scan::scan_dir;

// Naming
pub use ident::sanitize_identifier;
