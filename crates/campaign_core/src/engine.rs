use std::cmp::Ordering;
use std::num::NonZeroUsize;

use site_logging::site_debug;

use crate::{CampaignId, CampaignSummary};

/// Page increment used when no other step is configured.
pub const DEFAULT_PAGE_STEP: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(step) => step,
    None => panic!("page step must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    Newest,
    Progress,
    Amount,
    Popular,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Newest,
        SortCriterion::Progress,
        SortCriterion::Amount,
        SortCriterion::Popular,
    ];

    /// Parses a selector value. Unrecognized values fall back to `Newest`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => SortCriterion::Newest,
            "progress" => SortCriterion::Progress,
            "amount" => SortCriterion::Amount,
            "popular" => SortCriterion::Popular,
            other => {
                site_debug!("Unrecognized sort criterion {:?}, using newest", other);
                SortCriterion::Newest
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Newest => "newest",
            SortCriterion::Progress => "progress",
            SortCriterion::Amount => "amount",
            SortCriterion::Popular => "popular",
        }
    }

    /// Descending order on the criterion's key. Equal keys compare `Equal` so a
    /// stable sort keeps source order for ties.
    fn compare(self, a: &CampaignSummary, b: &CampaignSummary) -> Ordering {
        match self {
            SortCriterion::Newest => b.created_at.cmp(&a.created_at),
            SortCriterion::Progress => b.raised_amount.total_cmp(&a.raised_amount),
            SortCriterion::Amount => b.goal_amount.total_cmp(&a.goal_amount),
            SortCriterion::Popular => b.supporter_count.cmp(&a.supporter_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Reserved selector value meaning "no filter".
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL_SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw.to_string())
        }
    }

    pub fn matches(&self, campaign: &CampaignSummary) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => campaign.category == *category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_SENTINEL,
            CategoryFilter::Category(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for CategoryFilter {
    fn from(raw: String) -> Self {
        if raw == Self::ALL_SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw)
        }
    }
}

/// Derived snapshot of the list: the visible prefix plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub visible: Vec<&'a CampaignSummary>,
    pub total_filtered: usize,
    pub total_shown: usize,
    pub has_more: bool,
}

impl ListView<'_> {
    pub fn remaining(&self) -> usize {
        self.total_filtered - self.total_shown
    }

    pub fn ids(&self) -> Vec<CampaignId> {
        self.visible.iter().map(|campaign| campaign.id).collect()
    }
}

/// Filter, sort and paginate engine over a fixed set of campaigns.
///
/// `visible_view` is a pure function of the items and the three criteria
/// fields; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEngine {
    all_items: Vec<CampaignSummary>,
    filter: CategoryFilter,
    sort: SortCriterion,
    page_step: NonZeroUsize,
    page_size: usize,
}

impl Default for ListEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ListEngine {
    pub fn new() -> Self {
        Self::with_page_step(DEFAULT_PAGE_STEP)
    }

    pub fn with_page_step(page_step: NonZeroUsize) -> Self {
        Self {
            all_items: Vec::new(),
            filter: CategoryFilter::All,
            sort: SortCriterion::Newest,
            page_step,
            page_size: page_step.get(),
        }
    }

    /// Replaces the item set and resets every criterion to its default.
    pub fn initialize(&mut self, items: Vec<CampaignSummary>) {
        self.all_items = items;
        self.filter = CategoryFilter::All;
        self.sort = SortCriterion::Newest;
        self.reset_page();
    }

    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.filter = filter.into();
        self.reset_page();
    }

    pub fn set_sort(&mut self, sort: SortCriterion) {
        self.sort = sort;
        self.reset_page();
    }

    pub fn set_sort_str(&mut self, raw: &str) {
        self.set_sort(SortCriterion::parse(raw));
    }

    pub fn load_more(&mut self) {
        self.page_size = self.page_size.saturating_add(self.page_step.get());
    }

    pub fn items(&self) -> &[CampaignSummary] {
        &self.all_items
    }

    pub fn find(&self, id: CampaignId) -> Option<&CampaignSummary> {
        self.all_items.iter().find(|campaign| campaign.id == id)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortCriterion {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_step(&self) -> NonZeroUsize {
        self.page_step
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for campaign in &self.all_items {
            if !seen.contains(&campaign.category.as_str()) {
                seen.push(campaign.category.as_str());
            }
        }
        seen
    }

    pub fn visible_view(&self) -> ListView<'_> {
        let mut sorted: Vec<&CampaignSummary> = self
            .all_items
            .iter()
            .filter(|campaign| self.filter.matches(campaign))
            .collect();
        // `sort_by` is stable.
        sorted.sort_by(|a, b| self.sort.compare(a, b));

        let total_filtered = sorted.len();
        let has_more = total_filtered > self.page_size;
        sorted.truncate(self.page_size);
        let total_shown = sorted.len();

        ListView {
            visible: sorted,
            total_filtered,
            total_shown,
            has_more,
        }
    }

    fn reset_page(&mut self) {
        self.page_size = self.page_step.get();
    }
}
