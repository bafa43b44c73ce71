use rust_decimal_macros::dec;

use crate::decimal::Rate;

/// scheme name to annual rate mapping, fixed at deployment
///
/// An unrecognized scheme name (including empty) resolves to the
/// "Regular Saver" rate rather than failing. Callers that need strict
/// validation must check the name with [`RateTable::is_known`] before
/// resolving.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: Vec<(String, Rate)>,
    fallback: Rate,
}

impl Default for RateTable {
    fn default() -> Self {
        let regular = Rate::from_percentage(dec!(6.5));
        Self {
            entries: vec![
                ("Regular Saver".to_string(), regular),
                ("Premium Saver".to_string(), Rate::from_percentage(dec!(7.0))),
                ("Longterm Growth".to_string(), Rate::from_percentage(dec!(7.5))),
                ("Tax Saver".to_string(), Rate::from_percentage(dec!(7.2))),
            ],
            fallback: regular,
        }
    }
}

impl RateTable {
    /// applicable annual rate for a scheme
    pub fn rate_for(&self, scheme: &str) -> Rate {
        self.entries
            .iter()
            .find(|(name, _)| name == scheme)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.fallback)
    }

    /// whether the scheme is in the table (as opposed to falling back)
    pub fn is_known(&self, scheme: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == scheme)
    }
}

/// applicable annual rate for a scheme under the default table
pub fn rate_for_scheme(scheme: &str) -> Rate {
    RateTable::default().rate_for(scheme)
}
