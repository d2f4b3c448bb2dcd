use crate::{CampaignId, CampaignSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Data source delivered the full campaign list.
    CatalogLoaded(Vec<CampaignSummary>),
    /// User picked a category in the filter selector (applied on the next tick).
    FilterSelected(String),
    /// User picked a sort criterion (applied on the next tick).
    SortSelected(String),
    /// User clicked Load More.
    LoadMoreClicked,
    /// User toggled the favorite marker on a campaign.
    FavoriteToggled(CampaignId),
    /// Restore favorites from the local cache.
    RestoreFavorites(Vec<CampaignId>),
    /// UI tick; settles pending criteria changes.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
