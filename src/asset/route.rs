//! Asset route: request path → asset mapping.

/// One record of the generated `k_assets[]` table.
///
/// Several records may point at the same asset (`/index.html` and `/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    /// Request path matched by `web_assets_get` (e.g., "/app.js")
    pub path: String,
    /// Content-Type reported for the route
    pub content_type: &'static str,
    /// Index into the table's asset list
    pub asset: usize,
}

/// Root route aliased to `index.html`.
pub const ROOT_ROUTE: &str = "/";
