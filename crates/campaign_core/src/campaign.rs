use chrono::{DateTime, Utc};

pub type CampaignId = u64;

/// One fundraising campaign as supplied by the data source. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub title: String,
    pub category: String,
    pub raised_amount: f64,
    pub goal_amount: f64,
    pub supporter_count: u32,
    pub created_at: DateTime<Utc>,
}

impl CampaignSummary {
    pub fn progress_percentage(&self) -> f64 {
        crate::money::progress_percentage(self.raised_amount, self.goal_amount)
    }
}
