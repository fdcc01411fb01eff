//! Currency and date formatting.
//!
//! Formatting is fully deterministic: locale behavior comes from explicit
//! [`LocaleConfig`] presets rather than host locale services, with `pt-BR`
//! as the fixed fallback tier.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Fallback currency when a requested code is not in the registry.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_supported(&self) -> bool {
        currency_info(self.as_str()).is_some()
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

/// Registry entry for a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub label: &'static str,
    pub minor_units: u8,
}

static CURRENCY_REGISTRY: Lazy<BTreeMap<&'static str, CurrencyInfo>> = Lazy::new(|| {
    [
        CurrencyInfo {
            code: "BRL",
            symbol: "R$",
            label: "Real (R$)",
            minor_units: 2,
        },
        CurrencyInfo {
            code: "USD",
            symbol: "$",
            label: "Dólar ($)",
            minor_units: 2,
        },
        CurrencyInfo {
            code: "EUR",
            symbol: "€",
            label: "Euro (€)",
            minor_units: 2,
        },
    ]
    .into_iter()
    .map(|info| (info.code, info))
    .collect()
});

pub fn currency_info(code: &str) -> Option<CurrencyInfo> {
    CURRENCY_REGISTRY.get(code).copied()
}

/// Supported currencies in registry order, for settings pickers.
pub fn supported_currencies() -> Vec<CurrencyInfo> {
    CURRENCY_REGISTRY.values().copied().collect()
}

pub fn symbol_for(code: &str) -> String {
    match currency_info(code) {
        Some(info) => info.symbol.to_string(),
        None => code.to_string(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    currency_info(code).map(|info| info.minor_units).unwrap_or(2)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    /// `DD/MM/YYYY`, the deterministic fallback rendering.
    Numeric,
    /// `YYYY-MM-DD`.
    Iso,
    /// `15 Dez 2024`.
    Medium,
}

/// Locale-dependent formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            date_format: DateFormatStyle::Numeric,
        }
    }
}

impl LocaleConfig {
    /// Resolves a language tag to a known preset. Unrecognized tags log a
    /// warning and fall back to the default preset so formatting always has
    /// a deterministic shape.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "pt-BR" => Self::default(),
            "en-US" => Self {
                language_tag: "en-US".into(),
                decimal_separator: '.',
                grouping_separator: ',',
                date_format: DateFormatStyle::Iso,
            },
            unknown => {
                tracing::warn!(locale = unknown, "unrecognized locale tag, using pt-BR");
                Self::default()
            }
        }
    }
}

/// Renders a non-negative magnitude with grouping and the locale's decimal
/// separator.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let rendered = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };
    let mut body = group_digits(int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        body.push(locale.decimal_separator);
        body.push_str(frac);
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount under the given currency code. Codes missing from the
/// registry degrade to [`DEFAULT_CURRENCY`] formatting; the degradation is
/// logged, never raised.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let info = currency_info(code.as_str()).unwrap_or_else(|| {
        tracing::warn!(
            currency = code.as_str(),
            "unsupported currency code, falling back to {DEFAULT_CURRENCY}"
        );
        currency_info(DEFAULT_CURRENCY).expect("default currency is registered")
    });
    let body = format_number(locale, amount, info.minor_units);
    if amount < 0.0 {
        format!("-{} {}", info.symbol, body)
    } else {
        format!("{} {}", info.symbol, body)
    }
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Numeric => format!(
            "{:02}/{:02}/{}",
            date.day(),
            date.month(),
            date.year()
        ),
        DateFormatStyle::Iso => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(date.month()),
            date.year()
        ),
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Fev",
        3 => "Mar",
        4 => "Abr",
        5 => "Mai",
        6 => "Jun",
        7 => "Jul",
        8 => "Ago",
        9 => "Set",
        10 => "Out",
        11 => "Nov",
        12 => "Dez",
        _ => "",
    }
}
