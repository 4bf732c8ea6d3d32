use anyhow::Result;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::info;

use crate::config::ResolverConfig;
use crate::resolve;
use crate::tables::TableStore;

/// Session-scoped data context.
///
/// Resolution and load happen on first access to [`Session::tables`]; later
/// calls hand back the same snapshot without touching storage. Each session
/// owns its own snapshot, so concurrent sessions share nothing mutable.
pub struct Session {
    cfg: ResolverConfig,
    tables: OnceCell<Arc<TableStore>>,
}

impl Session {
    pub fn new(cfg: ResolverConfig) -> Self {
        Self {
            cfg,
            tables: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.cfg
    }

    /// The loaded tables, resolving them on first call.
    pub fn tables(&self) -> Result<Arc<TableStore>> {
        let store = self.tables.get_or_try_init(|| {
            let store = resolve::resolve(&self.cfg)?;
            info!(
                source = %store.source(),
                states = store.state_monthly().len(),
                crops = store.crop_footprints().len(),
                households = store.households().len(),
                "session tables loaded"
            );
            Ok::<_, anyhow::Error>(Arc::new(store))
        })?;
        Ok(Arc::clone(store))
    }

    pub fn is_loaded(&self) -> bool {
        self.tables.get().is_some()
    }

    /// Drop the cached snapshot; the next [`Session::tables`] call re-resolves.
    pub fn refresh(&mut self) {
        if self.tables.take().is_some() {
            info!("session tables discarded; will re-resolve on next access");
        }
    }
}
