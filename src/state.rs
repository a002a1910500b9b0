use std::sync::Arc;

use crate::{catalog::Catalog, config::Config, error::AppError, pages::Pages};

pub struct State {
    pub config: Config,
    pub catalog: Catalog,
    pub pages: Pages,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let catalog = Catalog::load(&config.catalog_path)?;
        let pages = Pages::new()?;

        Ok(Self::with_catalog(config, catalog, pages))
    }

    pub fn with_catalog(config: Config, catalog: Catalog, pages: Pages) -> Arc<Self> {
        Arc::new(Self {
            config,
            catalog,
            pages,
        })
    }
}
