use crate::{AppState, CategoryFilter, Effect, Msg, SortCriterion};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogLoaded(items) => {
            state.load_catalog(items);
            Vec::new()
        }
        Msg::FilterSelected(raw) => {
            // Last selection before the next tick wins.
            state.stage_filter(CategoryFilter::from(raw));
            Vec::new()
        }
        Msg::SortSelected(raw) => {
            state.stage_sort(SortCriterion::parse(&raw));
            Vec::new()
        }
        Msg::Tick => {
            state.settle_pending();
            Vec::new()
        }
        Msg::LoadMoreClicked => {
            // Grow the page under the criteria the user last picked.
            state.settle_pending();
            match state.load_more() {
                Some(id) => vec![Effect::RevealCampaign { id }],
                None => Vec::new(),
            }
        }
        Msg::FavoriteToggled(id) => match state.toggle_favorite(id) {
            Some(added) => {
                let message = if added {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                };
                vec![
                    Effect::Notify {
                        message: message.to_string(),
                    },
                    Effect::PersistFavorites {
                        ids: state.favorites_snapshot(),
                    },
                ]
            }
            None => Vec::new(),
        },
        Msg::RestoreFavorites(ids) => {
            state.restore_favorites(ids);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
