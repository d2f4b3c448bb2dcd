use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use site_logging::{site_debug, site_info};

use crate::money::format_amount;
use crate::view_model::{load_more_label, results_label, AppViewModel, CampaignRowView};
use crate::{CampaignId, CampaignSummary, CategoryFilter, Currency, ListEngine, SortCriterion};

/// Criteria selected by the user but not yet applied to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct PendingCriteria {
    filter: Option<CategoryFilter>,
    sort: Option<SortCriterion>,
}

impl PendingCriteria {
    fn is_empty(&self) -> bool {
        self.filter.is_none() && self.sort.is_none()
    }
}

/// Session state for one campaigns page: the list engine plus favorites.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    engine: ListEngine,
    favorites: BTreeSet<CampaignId>,
    pending: PendingCriteria,
    currency: Currency,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(page_step: NonZeroUsize, currency: Currency) -> Self {
        Self {
            engine: ListEngine::with_page_step(page_step),
            currency,
            ..Self::default()
        }
    }

    pub fn engine(&self) -> &ListEngine {
        &self.engine
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_favorite(&self, id: CampaignId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorites in ascending id order.
    pub fn favorites_snapshot(&self) -> Vec<CampaignId> {
        self.favorites.iter().copied().collect()
    }

    pub fn view(&self) -> AppViewModel {
        let list = self.engine.visible_view();
        let rows = list
            .visible
            .iter()
            .map(|campaign| self.row_view(campaign))
            .collect();

        AppViewModel {
            rows,
            active_filter: self.engine.filter().as_str().to_string(),
            active_sort: self.engine.sort(),
            categories: self
                .engine
                .categories()
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            total_filtered: list.total_filtered,
            total_shown: list.total_shown,
            has_more: list.has_more,
            results_label: results_label(&list),
            load_more_label: load_more_label(&list),
            favorites_count: self.favorites.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn load_catalog(&mut self, items: Vec<CampaignSummary>) {
        site_info!("Catalog loaded with {} campaigns", items.len());
        self.engine.initialize(items);
        self.pending = PendingCriteria::default();
        self.dirty = true;
    }

    pub(crate) fn stage_filter(&mut self, filter: CategoryFilter) {
        self.pending.filter = Some(filter);
    }

    pub(crate) fn stage_sort(&mut self, sort: SortCriterion) {
        self.pending.sort = Some(sort);
    }

    /// Applies the latest staged criteria. Returns true if anything changed.
    pub(crate) fn settle_pending(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return false;
        }
        if let Some(filter) = pending.filter {
            site_debug!("Applying filter {:?}", filter.as_str());
            self.engine.set_filter(filter);
        }
        if let Some(sort) = pending.sort {
            site_debug!("Applying sort {}", sort.as_str());
            self.engine.set_sort(sort);
        }
        self.dirty = true;
        true
    }

    /// Grows the page. Returns the first newly visible campaign, if any.
    pub(crate) fn load_more(&mut self) -> Option<CampaignId> {
        let shown_before = self.engine.visible_view().total_shown;
        self.engine.load_more();
        let list = self.engine.visible_view();
        if list.total_shown > shown_before {
            self.dirty = true;
            list.visible.get(shown_before).map(|campaign| campaign.id)
        } else {
            None
        }
    }

    /// Returns `Some(true)` when added, `Some(false)` when removed, and `None`
    /// for ids not in the catalog.
    pub(crate) fn toggle_favorite(&mut self, id: CampaignId) -> Option<bool> {
        self.engine.find(id)?;
        let added = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        self.dirty = true;
        Some(added)
    }

    pub(crate) fn restore_favorites(&mut self, ids: Vec<CampaignId>) {
        let restored: BTreeSet<CampaignId> = ids.into_iter().collect();
        if restored != self.favorites {
            self.favorites = restored;
            self.dirty = true;
        }
    }

    fn row_view(&self, campaign: &CampaignSummary) -> CampaignRowView {
        CampaignRowView {
            id: campaign.id,
            title: campaign.title.clone(),
            category: campaign.category.clone(),
            raised: format_amount(campaign.raised_amount, &self.currency),
            goal: format_amount(campaign.goal_amount, &self.currency),
            progress_percent: campaign.progress_percentage().round() as u8,
            supporters: campaign.supporter_count,
            favorite: self.is_favorite(campaign.id),
        }
    }
}
