use std::io;
use std::path::PathBuf;

use campaign_core::CampaignId;
use thiserror::Error;

use crate::PersistError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("duplicate campaign id {0}")]
    DuplicateId(CampaignId),
    #[error("campaign {id}: {reason}")]
    InvalidRecord { id: CampaignId, reason: String },
    #[error("failed to serialize state: {0}")]
    Serialize(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
