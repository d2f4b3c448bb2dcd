use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use campaign_core::{CampaignId, Currency, DEFAULT_PAGE_STEP};
use serde::{Deserialize, Serialize};
use site_logging::{site_info, site_warn};

use crate::persist::read_optional;
use crate::StoreError;

/// Site settings read from a RON file. Absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Campaigns revealed per page and per Load More.
    pub page_step: usize,
    /// ISO code used to format amounts.
    pub currency: String,
    /// Also write logs to `campaigns.log` in the working directory.
    pub log_to_file: bool,
    /// Where the favorites cache lives.
    pub state_dir: PathBuf,
    /// Public site root; campaign pages live at `{site_url}/campaign/{id}`.
    pub site_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_step: DEFAULT_PAGE_STEP.get(),
            currency: "NGN".to_string(),
            log_to_file: false,
            state_dir: PathBuf::from("."),
            site_url: "http://localhost:5000".to_string(),
        }
    }
}

impl SiteConfig {
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = read_optional(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(content) = content else {
            site_info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        };
        ron::from_str(&content).map_err(|err| StoreError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn page_step(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_step).unwrap_or_else(|| {
            site_warn!("page_step must be positive, using {}", DEFAULT_PAGE_STEP);
            DEFAULT_PAGE_STEP
        })
    }

    pub fn currency(&self) -> Currency {
        Currency::parse(&self.currency)
    }

    pub fn campaign_url(&self, id: CampaignId) -> String {
        format!("{}/campaign/{id}", self.site_url.trim_end_matches('/'))
    }
}
