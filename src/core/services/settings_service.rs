use crate::config::Config;
use crate::core::services::{ServiceError, ServiceResult};
use crate::currency::{format_currency_value, CurrencyCode, LocaleConfig};

/// Mutations and formatting helpers over the user settings.
pub struct SettingsService;

impl SettingsService {
    /// Stores a currency code after shape validation. Codes outside the
    /// supported set are accepted but flagged, since formatting will
    /// degrade to the default currency.
    pub fn set_currency(config: &mut Config, code: &str) -> ServiceResult<()> {
        let code = CurrencyCode::new(code);
        if code.as_str().len() != 3 || !code.as_str().chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ServiceError::Invalid(format!(
                "`{}` is not an ISO 4217 currency code",
                code.as_str()
            )));
        }
        if !code.is_supported() {
            tracing::warn!(
                currency = code.as_str(),
                "currency outside the supported set, formatting will fall back"
            );
        }
        config.currency = code.as_str().to_string();
        Ok(())
    }

    /// Stores the locale resolved to a known preset; unrecognized tags fall
    /// back to the default preset.
    pub fn set_locale(config: &mut Config, tag: &str) {
        config.locale = LocaleConfig::for_tag(tag).language_tag;
    }

    pub fn toggle_notifications(config: &mut Config) -> bool {
        config.notifications = !config.notifications;
        config.notifications
    }

    /// Formats an amount under the configured currency and locale.
    pub fn format_amount(config: &Config, amount: f64) -> String {
        let code = CurrencyCode::new(config.currency.as_str());
        let locale = LocaleConfig::for_tag(&config.locale);
        format_currency_value(amount, &code, &locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_currency_normalizes_case() {
        let mut config = Config::default();
        SettingsService::set_currency(&mut config, "usd").unwrap();
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn set_currency_rejects_malformed_codes() {
        let mut config = Config::default();
        let err = SettingsService::set_currency(&mut config, "R$")
            .expect_err("symbol is not a currency code");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert_eq!(config.currency, "BRL");
    }

    #[test]
    fn format_amount_uses_configured_currency() {
        let config = Config::default();
        assert_eq!(SettingsService::format_amount(&config, 45.90), "R$ 45,90");
    }
}
