use crate::CampaignId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient notification to the user.
    Notify { message: String },
    /// Write the favorites set to the local cache.
    PersistFavorites { ids: Vec<CampaignId> },
    /// Bring a newly visible campaign into view.
    RevealCampaign { id: CampaignId },
}
