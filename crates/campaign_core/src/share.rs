use thiserror::Error;
use url::{form_urlencoded, Url};

const SUMMARY_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("invalid campaign url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Outbound share targets for one campaign page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: Url,
    pub twitter: Url,
    pub whatsapp: Url,
    pub email: Url,
}

/// Builds share links for a campaign page. `summary` is cut to 100 characters;
/// without one the title is the share text.
pub fn share_links(
    title: &str,
    summary: Option<&str>,
    page_url: &str,
) -> Result<ShareLinks, ShareError> {
    let page = Url::parse(page_url).map_err(|err| ShareError::InvalidUrl {
        url: page_url.to_string(),
        reason: err.to_string(),
    })?;
    let page = page.as_str();
    let text = match summary {
        Some(summary) => {
            let cut: String = summary.chars().take(SUMMARY_CHARS).collect();
            format!("{cut}...")
        }
        None => title.to_string(),
    };

    let whatsapp_text = format!("{text} {page}");
    let subject = format!("Support: {title}");
    let body = format!("{text}\n\n{page}");

    Ok(ShareLinks {
        facebook: with_query("https://www.facebook.com/sharer/sharer.php", &[("u", page)])?,
        twitter: with_query(
            "https://twitter.com/intent/tweet",
            &[("text", text.as_str()), ("url", page)],
        )?,
        whatsapp: with_query("https://wa.me/", &[("text", whatsapp_text.as_str())])?,
        email: with_query(
            "mailto:",
            &[("subject", subject.as_str()), ("body", body.as_str())],
        )?,
    })
}

/// Appends `params` with spaces as `%20`; `mailto:` readers do not decode `+`.
fn with_query(base: &str, params: &[(&str, &str)]) -> Result<Url, ShareError> {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    let raw = format!("{base}?{query}");
    Url::parse(&raw).map_err(|err| ShareError::InvalidUrl {
        url: raw.clone(),
        reason: err.to_string(),
    })
}

fn encode_component(value: &str) -> String {
    // `byte_serialize` escapes a literal '+' as %2B, so every '+' left is a space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
