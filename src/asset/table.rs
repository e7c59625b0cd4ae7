//! The asset table emitted into the generated source.
//!
//! `AssetTable::get_into` (test builds only) follows the generated
//! `web_assets_get` record for record, null checks included. Tests resolve
//! routes through it instead of compiling C.

use std::collections::HashMap;

use super::route::{AssetRoute, ROOT_ROUTE};
use super::{Asset, BundleError};

/// Ordered assets plus the route records that reference them.
#[derive(Debug, Clone)]
pub struct AssetTable {
    assets: Vec<Asset>,
    routes: Vec<AssetRoute>,
}

/// A successful route lookup.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub content_type: &'static str,
    pub body: &'a [u8],
}

impl AssetTable {
    /// Build the table from assets already sorted by name.
    ///
    /// `index.html` contributes a second record for `/` right after its own.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::DuplicateIdentifier`] if two assets sanitize to
    /// the same identifier, since the generated arrays would clash.
    pub fn build(assets: Vec<Asset>) -> Result<Self, BundleError> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(assets.len());
        for asset in &assets {
            if let Some(first) = seen.insert(&asset.ident, &asset.name) {
                return Err(BundleError::DuplicateIdentifier {
                    identifier: asset.ident.clone(),
                    first: first.to_string(),
                    second: asset.name.clone(),
                });
            }
        }

        let mut routes = Vec::with_capacity(assets.len() + 1);
        for (index, asset) in assets.iter().enumerate() {
            routes.push(AssetRoute {
                path: asset.route(),
                content_type: asset.content_type,
                asset: index,
            });
            if asset.is_index() {
                routes.push(AssetRoute {
                    path: ROOT_ROUTE.to_string(),
                    content_type: asset.content_type,
                    asset: index,
                });
            }
        }

        Ok(Self { assets, routes })
    }

    /// Assets in emission order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Route records in emission order.
    pub fn routes(&self) -> &[AssetRoute] {
        &self.routes
    }

    /// Asset referenced by a route record.
    pub fn asset_for(&self, route: &AssetRoute) -> &Asset {
        &self.assets[route.asset]
    }

    /// Total embedded bytes (each asset counted once).
    pub fn total_bytes(&self) -> usize {
        self.assets.iter().map(|a| a.body.len()).sum()
    }

    /// Resolve a route: first exact, case-sensitive match in table order.
    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<Resolved<'_>> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| Resolved {
                content_type: route.content_type,
                body: &self.asset_for(route).body,
            })
    }

    /// Out-parameter form of [`get`](Self::get), with `None` standing in for
    /// a null pointer.
    ///
    /// Returns `false` without scanning if any argument is `None`, and
    /// `false` on a miss. Outputs are written only on a hit.
    #[cfg(test)]
    pub fn get_into<'a>(
        &'a self,
        path: Option<&str>,
        content_type: Option<&mut &'static str>,
        body: Option<&mut &'a [u8]>,
        body_length: Option<&mut usize>,
    ) -> bool {
        let (Some(path), Some(content_type), Some(body), Some(body_length)) =
            (path, content_type, body, body_length)
        else {
            return false;
        };

        match self.get(path) {
            Some(resolved) => {
                *content_type = resolved.content_type;
                *body = resolved.body;
                *body_length = resolved.body.len();
                true
            }
            None => false,
        }
    }
}
