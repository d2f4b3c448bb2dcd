use crate::{CampaignId, ListView, SortCriterion};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub rows: Vec<CampaignRowView>,
    pub active_filter: String,
    pub active_sort: SortCriterion,
    pub categories: Vec<String>,
    pub total_filtered: usize,
    pub total_shown: usize,
    pub has_more: bool,
    pub results_label: String,
    pub load_more_label: Option<String>,
    pub favorites_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRowView {
    pub id: CampaignId,
    pub title: String,
    pub category: String,
    /// Formatted with the session currency.
    pub raised: String,
    pub goal: String,
    pub progress_percent: u8,
    pub supporters: u32,
    pub favorite: bool,
}

pub fn results_label(view: &ListView<'_>) -> String {
    if view.total_shown == view.total_filtered {
        format!("Showing all {} campaigns", view.total_filtered)
    } else {
        format!(
            "Showing {} of {} campaigns",
            view.total_shown, view.total_filtered
        )
    }
}

pub fn load_more_label(view: &ListView<'_>) -> Option<String> {
    view.has_more.then(|| format!("Load More ({} remaining)", view.remaining()))
}
