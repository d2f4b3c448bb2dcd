use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use campaign_core::{
    donate_button_label, resolve_donation, share_links, update, AmountChoice, AppState,
    CampaignId, Msg,
};
use campaign_store::{load_catalog, FavoritesStore, SiteConfig};
use site_logging::{site_info, site_warn};

use super::commands::{parse_command, Command};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

pub struct LaunchOptions {
    pub catalog: PathBuf,
    pub config: PathBuf,
    pub script: Option<PathBuf>,
}

pub fn run_app(options: LaunchOptions) -> anyhow::Result<()> {
    let config = SiteConfig::load(&options.config)
        .with_context(|| format!("loading config {:?}", options.config))?;
    logging::initialize(if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    let campaigns = load_catalog(&options.catalog)
        .with_context(|| format!("loading catalog {:?}", options.catalog))?;
    let favorites = FavoritesStore::new(config.state_dir.clone());
    let restored = favorites.load();

    let state = AppState::with_settings(config.page_step(), config.currency());
    let stdout = io::stdout();
    let mut session = Session::new(state, EffectRunner::new(favorites), config, stdout.lock());
    session.dispatch(Msg::CatalogLoaded(campaigns))?;
    session.dispatch(Msg::RestoreFavorites(restored))?;
    session.render_if_dirty()?;

    match &options.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening script {:?}", path))?;
            drive(&mut session, BufReader::new(file))
        }
        None => drive(&mut session, io::stdin().lock()),
    }
}

/// Feeds input lines to the session until EOF or `quit`.
fn drive<R: BufRead, W: Write>(session: &mut Session<W>, input: R) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("reading command")?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Show)) => session.render()?,
            Ok(Some(Command::Share(id))) => session.share(id)?,
            Ok(Some(Command::Donate(amount))) => session.donate(amount)?,
            Ok(Some(command)) => {
                if let Some(msg) = command.into_msg() {
                    session.dispatch(msg)?;
                }
            }
            Err(err) => {
                site_warn!("Rejected input {:?}: {}", line, err);
                writeln!(session.out, "error: {err}")?;
            }
        }
        // One tick per input line settles staged criteria before rendering.
        session.dispatch(Msg::Tick)?;
        session.render_if_dirty()?;
    }
    site_info!("Input closed");
    Ok(())
}

struct Session<W: Write> {
    state: AppState,
    effects: EffectRunner,
    config: SiteConfig,
    out: W,
}

impl<W: Write> Session<W> {
    fn new(state: AppState, effects: EffectRunner, config: SiteConfig, out: W) -> Self {
        Self {
            state,
            effects,
            config,
            out,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects, &mut self.out)
    }

    fn render_if_dirty(&mut self) -> io::Result<()> {
        if self.state.consume_dirty() {
            self.render()
        } else {
            Ok(())
        }
    }

    fn share(&mut self, id: CampaignId) -> io::Result<()> {
        let Some(campaign) = self.state.engine().find(id) else {
            return writeln!(self.out, "error: no campaign #{id}");
        };
        match share_links(&campaign.title, None, &self.config.campaign_url(id)) {
            Ok(links) => {
                writeln!(self.out, "Share #{id} {}", campaign.title)?;
                writeln!(self.out, "  facebook: {}", links.facebook)?;
                writeln!(self.out, "  twitter: {}", links.twitter)?;
                writeln!(self.out, "  whatsapp: {}", links.whatsapp)?;
                writeln!(self.out, "  email: {}", links.email)
            }
            Err(err) => {
                site_warn!("Cannot share campaign {}: {}", id, err);
                writeln!(self.out, "error: {err}")
            }
        }
    }

    fn donate(&mut self, amount: Option<String>) -> io::Result<()> {
        let choice = amount.map(AmountChoice::Custom);
        let currency = self.state.currency();
        match resolve_donation(choice.as_ref(), currency) {
            Ok(_) => writeln!(
                self.out,
                "[{}]",
                donate_button_label(choice.as_ref(), currency)
            ),
            Err(err) => writeln!(self.out, "error: {err}"),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        for line in render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)
    }
}
