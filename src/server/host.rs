//! Server host for transport-agnostic API exposure
//!
//! The host owns everything a transport needs to serve the catalog: the
//! validated configuration and the injected store.

use crate::config::CatalogConfig;
use crate::core::store::CatalogStore;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_builder_components(Arc::new(store), config)?;
/// let rest_app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Validated service configuration
    pub config: Arc<CatalogConfig>,

    /// Store backing every product route
    pub store: Arc<dyn CatalogStore>,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Fails when the configuration does not validate.
    pub fn from_builder_components(
        store: Arc<dyn CatalogStore>,
        config: CatalogConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            store,
        })
    }

    /// Path the product routes are mounted on
    pub fn base_path(&self) -> &str {
        &self.config.listing.base_path
    }

    /// Name of the store backend
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }
}
