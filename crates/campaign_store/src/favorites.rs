use std::path::PathBuf;

use campaign_core::CampaignId;
use serde::{Deserialize, Serialize};
use site_logging::{site_info, site_warn};

use crate::persist::read_optional;
use crate::{AtomicFileWriter, StoreError};

const FAVORITES_FILENAME: &str = ".favorites.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedFavorites {
    favorites: Vec<CampaignId>,
}

/// Best-effort local cache of favorite campaign ids.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    writer: AtomicFileWriter,
}

impl FavoritesStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(FAVORITES_FILENAME)
    }

    /// Missing or unreadable caches yield an empty list.
    pub fn load(&self) -> Vec<CampaignId> {
        let path = self.path();
        let content = match read_optional(&path) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                site_warn!("Failed to read favorites from {:?}: {}", path, err);
                return Vec::new();
            }
        };

        match ron::from_str::<PersistedFavorites>(&content) {
            Ok(state) => {
                site_info!("Loaded {} favorites from {:?}", state.favorites.len(), path);
                state.favorites
            }
            Err(err) => {
                site_warn!("Failed to parse favorites from {:?}: {}", path, err);
                Vec::new()
            }
        }
    }

    /// Writes the cache, logging instead of failing.
    pub fn save(&self, ids: &[CampaignId]) {
        if let Err(err) = self.try_save(ids) {
            site_warn!("Failed to save favorites to {:?}: {}", self.path(), err);
        }
    }

    pub fn try_save(&self, ids: &[CampaignId]) -> Result<PathBuf, StoreError> {
        let state = PersistedFavorites {
            favorites: ids.to_vec(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&state, pretty)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;
        Ok(self.writer.write(FAVORITES_FILENAME, &content)?)
    }
}
