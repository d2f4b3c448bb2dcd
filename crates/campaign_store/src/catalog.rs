use std::collections::HashSet;
use std::fs;
use std::path::Path;

use campaign_core::{CampaignId, CampaignSummary};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use site_logging::site_info;

use crate::StoreError;

#[derive(Debug, Clone, Deserialize)]
struct CatalogRecord {
    id: CampaignId,
    title: String,
    category: String,
    #[serde(default)]
    raised: f64,
    goal: f64,
    #[serde(default)]
    supporters: u32,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    campaigns: Vec<CatalogRecord>,
}

/// Loads the campaign list from a RON catalog file, keeping file order.
pub fn load_catalog(path: &Path) -> Result<Vec<CampaignSummary>, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let campaigns = parse_from(&content, path)?;
    site_info!("Loaded {} campaigns from {:?}", campaigns.len(), path);
    Ok(campaigns)
}

/// Parses catalog text. Duplicate ids and negative amounts are rejected.
pub fn parse_catalog(content: &str) -> Result<Vec<CampaignSummary>, StoreError> {
    parse_from(content, Path::new("<inline>"))
}

fn parse_from(content: &str, origin: &Path) -> Result<Vec<CampaignSummary>, StoreError> {
    let file: CatalogFile = ron::from_str(content).map_err(|err| StoreError::Parse {
        path: origin.to_path_buf(),
        message: err.to_string(),
    })?;

    let mut seen = HashSet::with_capacity(file.campaigns.len());
    file.campaigns
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            validate_record(&record)?;
            Ok(CampaignSummary {
                id: record.id,
                title: record.title,
                category: record.category,
                raised_amount: record.raised,
                goal_amount: record.goal,
                supporter_count: record.supporters,
                created_at: record.created_at,
            })
        })
        .collect()
}

fn validate_record(record: &CatalogRecord) -> Result<(), StoreError> {
    let invalid = |reason: &str| StoreError::InvalidRecord {
        id: record.id,
        reason: reason.to_string(),
    };
    if !record.raised.is_finite() || record.raised < 0.0 {
        return Err(invalid("raised amount must be a non-negative number"));
    }
    if !record.goal.is_finite() || record.goal <= 0.0 {
        return Err(invalid("goal amount must be positive"));
    }
    Ok(())
}
