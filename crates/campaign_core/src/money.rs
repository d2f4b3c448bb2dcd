use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Ngn,
    Usd,
    Ghs,
    Zar,
    Kes,
    /// Any other ISO code; displayed with the code itself as symbol.
    Other(String),
}

impl Currency {
    pub fn parse(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        match code.as_str() {
            "NGN" => Currency::Ngn,
            "USD" => Currency::Usd,
            "GHS" => Currency::Ghs,
            "ZAR" => Currency::Zar,
            "KES" => Currency::Kes,
            _ => Currency::Other(code),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usd => "USD",
            Currency::Ghs => "GHS",
            Currency::Zar => "ZAR",
            Currency::Kes => "KES",
            Currency::Other(code) => code,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Currency::Ngn => "₦",
            Currency::Usd => "$",
            Currency::Ghs => "GH₵",
            Currency::Zar => "R",
            Currency::Kes => "KSh",
            Currency::Other(code) => code,
        }
    }

    /// Smallest custom donation accepted in this currency.
    pub fn minimum_donation(&self) -> f64 {
        match self {
            Currency::Ngn => 100.0,
            Currency::Usd => 1.0,
            _ => 10.0,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Symbol plus grouped amount, e.g. `₦12,500`, `$1,234.50` or `₦-5`.
pub fn format_amount(amount: f64, currency: &Currency) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    if fraction == 0 {
        format!("{}{sign}{whole}", currency.symbol())
    } else {
        format!("{}{sign}{whole}.{fraction:02}", currency.symbol())
    }
}

fn group_thousands(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Share of the goal reached, clamped to 100. A non-positive goal yields 0.
pub fn progress_percentage(raised: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (raised / goal * 100.0).min(100.0)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DonationError {
    #[error("Please select a donation amount")]
    NoAmountSelected,
    #[error("Please enter a valid custom amount")]
    InvalidAmount,
    #[error("Minimum donation amount is {minimum}")]
    BelowMinimum { minimum: String },
}

/// Amount picked on the donation form.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountChoice {
    Preset(f64),
    Custom(String),
}

/// Validates a free-text custom amount against the currency minimum.
pub fn validate_custom_amount(raw: &str, currency: &Currency) -> Result<f64, DonationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DonationError::InvalidAmount)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DonationError::InvalidAmount);
    }
    let minimum = currency.minimum_donation();
    if value < minimum {
        return Err(DonationError::BelowMinimum {
            minimum: format_amount(minimum, currency),
        });
    }
    Ok(value)
}

/// Resolves the form's selection to a chargeable amount.
pub fn resolve_donation(
    choice: Option<&AmountChoice>,
    currency: &Currency,
) -> Result<f64, DonationError> {
    match choice {
        None => Err(DonationError::NoAmountSelected),
        Some(AmountChoice::Preset(amount)) => Ok(*amount),
        Some(AmountChoice::Custom(raw)) => validate_custom_amount(raw, currency),
    }
}

/// Text for the submit button: the formatted amount when one is known.
pub fn donate_button_label(choice: Option<&AmountChoice>, currency: &Currency) -> String {
    let amount = match choice {
        Some(AmountChoice::Preset(amount)) => Some(*amount),
        Some(AmountChoice::Custom(raw)) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        None => None,
    };
    match amount {
        Some(amount) => format!("Donate {}", format_amount(amount, currency)),
        None => "Donate Securely".to_string(),
    }
}
