use std::io::{self, Write};

use campaign_core::Effect;
use campaign_store::FavoritesStore;
use site_logging::{site_debug, site_info};

pub struct EffectRunner {
    favorites: FavoritesStore,
}

impl EffectRunner {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self { favorites }
    }

    pub fn run<W: Write>(&self, effects: Vec<Effect>, out: &mut W) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::Notify { message } => {
                    site_info!("Notify: {}", message);
                    writeln!(out, "! {message}")?;
                }
                Effect::PersistFavorites { ids } => {
                    site_debug!("Persisting {} favorites", ids.len());
                    self.favorites.save(&ids);
                }
                Effect::RevealCampaign { id } => {
                    writeln!(out, "> scrolled to #{id}")?;
                }
            }
        }
        Ok(())
    }
}
