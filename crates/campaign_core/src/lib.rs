//! Campaign core: list engine, session state machine and view-model helpers.
mod campaign;
mod effect;
mod engine;
mod money;
mod msg;
mod share;
mod state;
mod update;
mod view_model;

pub use campaign::{CampaignId, CampaignSummary};
pub use effect::Effect;
pub use engine::{CategoryFilter, ListEngine, ListView, SortCriterion, DEFAULT_PAGE_STEP};
pub use money::{
    donate_button_label, format_amount, progress_percentage, resolve_donation,
    validate_custom_amount, AmountChoice, Currency, DonationError,
};
pub use msg::Msg;
pub use share::{share_links, ShareError, ShareLinks};
pub use state::AppState;
pub use update::update;
pub use view_model::{load_more_label, results_label, AppViewModel, CampaignRowView};
