use campaign_core::{CampaignId, Msg};
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Sort(String),
    More,
    Favorite(CampaignId),
    Share(CampaignId),
    /// `None` when no amount was typed.
    Donate(Option<String>),
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (try: filter, sort, more, fav, share, donate, show, quit)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a campaign id: {0:?}")]
    InvalidId(String),
}

/// Parses a command line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "filter" => Command::Filter(required(rest, "filter")?.to_string()),
        "sort" => Command::Sort(required(rest, "sort")?.to_string()),
        "more" => Command::More,
        "fav" => Command::Favorite(campaign_id(required(rest, "fav")?)?),
        "share" => Command::Share(campaign_id(required(rest, "share")?)?),
        "donate" => Command::Donate((!rest.is_empty()).then(|| rest.to_string())),
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn campaign_id(raw: &str) -> Result<CampaignId, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidId(raw.to_string()))
}

impl Command {
    /// Message for the core, if this command changes state.
    pub fn into_msg(self) -> Option<Msg> {
        match self {
            Command::Filter(category) => Some(Msg::FilterSelected(category)),
            Command::Sort(criterion) => Some(Msg::SortSelected(criterion)),
            Command::More => Some(Msg::LoadMoreClicked),
            Command::Favorite(id) => Some(Msg::FavoriteToggled(id)),
            Command::Share(_) | Command::Donate(_) | Command::Show | Command::Quit => None,
        }
    }
}
