use crate::services::assets::AssetStore;
use crate::{Config, Database};

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub assets: AssetStore,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        let assets = AssetStore::from_config(&config.media);
        Self { config, db, assets }
    }
}
