use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::data::sheet::convert_design_sheet;
use crate::errors::{BotError, Result};
use crate::fetcher::ApiClient;
use crate::models::{ItemRecord, ITEM_DESIGN_KEY};

pub const DEFAULT_CACHE_PATH: &str = "data/item_designs.json";

// Cached designs older than this are refreshed from the API.
pub const CACHE_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub struct ItemDataStore {
    client: ApiClient,
    cache: HashMap<String, ItemRecord>,
    cache_path: PathBuf,
    last_update: SystemTime,
}

impl ItemDataStore {
    pub fn new(client: ApiClient, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            cache: HashMap::new(),
            cache_path: cache_path.into(),
            last_update: SystemTime::UNIX_EPOCH,
        }
    }

    // Load the cached snapshot; its age is the cache file's age on disk.
    pub async fn load_from_file(&mut self) -> Result<()> {
        let content = tokio::fs::read_to_string(&self.cache_path).await?;
        self.cache = serde_json::from_str(&content)?;
        let metadata = tokio::fs::metadata(&self.cache_path).await?;
        self.last_update = metadata.modified()?;
        Ok(())
    }

    pub async fn save_to_file(&self) -> Result<()> {
        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(&self.cache)?;
        tokio::fs::write(&self.cache_path, json).await?;
        Ok(())
    }

    pub async fn update_from_api(&mut self) -> Result<usize> {
        let sheet = self.client.fetch_item_design_sheet().await?;
        let designs = convert_design_sheet(&sheet, ITEM_DESIGN_KEY)?;
        if designs.is_empty() {
            return Err(BotError::ApiError(
                "item design sheet contained no designs".to_string(),
            ));
        }

        let mut records = HashMap::with_capacity(designs.len());
        for (id, attributes) in &designs {
            records.insert(id.clone(), ItemRecord::try_from(attributes)?);
        }

        // Swap the whole snapshot at once; readers never see a half refresh.
        self.cache = records;
        self.last_update = SystemTime::now();
        Ok(self.cache.len())
    }

    pub fn needs_update(&self, max_age: Duration) -> bool {
        self.last_update
            .elapsed()
            .map(|age| age > max_age)
            .unwrap_or(true)
    }

    pub fn get_item(&self, id: &str) -> Option<&ItemRecord> {
        self.cache.get(id)
    }

    pub fn items(&self) -> &HashMap<String, ItemRecord> {
        &self.cache
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

pub async fn initialize_item_store() -> Result<ItemDataStore> {
    let mut store = ItemDataStore::new(ApiClient::production(), DEFAULT_CACHE_PATH);

    if store.load_from_file().await.is_err() {
        println!("[initialize_item_store] Requesting a fresh item design sheet");
        store.update_from_api().await?;
        store.save_to_file().await?;
        return Ok(store);
    }

    if store.needs_update(CACHE_MAX_AGE) {
        println!("[initialize_item_store] Cached item designs are stale, refreshing");
        store.update_from_api().await?;
        store.save_to_file().await?;
    } else {
        println!("[initialize_item_store] Using cached item designs");
    }

    Ok(store)
}
