//! Value formatting for chart tooltips, data labels and axis ticks.
//!
//! All chart magnitudes are expressed in billions of US dollars. Values of a
//! thousand billions or more are shown as trillions with a fixed number of
//! decimals; smaller values keep their natural decimal representation.

use serde::{Deserialize, Serialize};

/// Threshold (in billions) at which values switch to the trillion unit.
pub const TRILLION_THRESHOLD: f64 = 1000.0;

/// Rendered for NaN and infinite magnitudes.
const NON_FINITE: &str = "—";

/// Unit suffix style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    /// `$1.5T` / `$731B`
    #[default]
    Short,
    /// `$1.5 Trillion` / `$731 Billion`
    Long,
}

impl UnitStyle {
    fn suffixes(self) -> (&'static str, &'static str) {
        match self {
            UnitStyle::Short => ("T", "B"),
            UnitStyle::Long => (" Trillion", " Billion"),
        }
    }
}

/// Formats magnitudes given in billions of US dollars.
///
/// One formatter instance is shared by every call site of a chart (tooltip,
/// on-chart label, axis tick) so the numbers shown never disagree.
///
/// ```rust
/// use pitch_deck::charts::ValueFormatter;
///
/// let market = ValueFormatter::new(1);
/// assert_eq!(market.format(1500.0), "$1.5T");
/// assert_eq!(market.format(7.3), "$7.3B");
///
/// let cost = ValueFormatter::new(2);
/// assert_eq!(cost.format(1460.0), "$1.46T");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormatter {
    /// Decimals used once a value is rendered in trillions.
    pub trillion_decimals: u8,
    /// Suffix style.
    #[serde(default)]
    pub units: UnitStyle,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ValueFormatter {
    /// Short-unit formatter with the given trillion precision.
    pub const fn new(trillion_decimals: u8) -> Self {
        Self {
            trillion_decimals,
            units: UnitStyle::Short,
        }
    }

    /// Same precision, different suffix style.
    pub const fn with_units(self, units: UnitStyle) -> Self {
        Self {
            trillion_decimals: self.trillion_decimals,
            units,
        }
    }

    /// Format a magnitude in billions.
    pub fn format(&self, billions: f64) -> String {
        if !billions.is_finite() {
            return NON_FINITE.to_owned();
        }

        let (trillion, billion) = self.units.suffixes();
        if billions >= TRILLION_THRESHOLD {
            let decimals = usize::from(self.trillion_decimals);
            let scaled = round_half_up(billions / TRILLION_THRESHOLD, self.trillion_decimals);
            format!("${scaled:.decimals$}{trillion}")
        } else {
            format!("${}{billion}", plain_number(billions))
        }
    }
}

/// Round to `decimals` places, ties away from zero.
///
/// `format!("{:.1}", 1.25)` rounds ties to even ("1.2"); display labels round
/// half up ("1.3").
pub fn round_half_up(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Shortest decimal representation, without a trailing `.0` for integers.
fn plain_number(value: f64) -> String {
    // -0.0 prints as "-0"
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Whole dollars with thousands separators: `615000` → `$615,000`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Millions of dollars as a compact label: `30.0` → `$30M`.
pub fn format_millions(millions: f64) -> String {
    if !millions.is_finite() {
        return NON_FINITE.to_owned();
    }
    format!("${}M", plain_number(millions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn market_chart_values() {
        let fmt = ValueFormatter::new(1);
        assert_eq!(fmt.format(1500.0), "$1.5T");
        assert_eq!(fmt.format(731.0), "$731B");
        assert_eq!(fmt.format(7.3), "$7.3B");
    }

    #[test]
    fn cost_chart_values() {
        let fmt = ValueFormatter::new(2);
        assert_eq!(fmt.format(1460.0), "$1.46T");
        assert_eq!(fmt.format(153.0), "$153B");
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(ValueFormatter::new(1).format(1000.0), "$1.0T");
        assert_eq!(ValueFormatter::new(1).format(999.9), "$999.9B");
    }

    #[test]
    fn trillions_keep_fixed_decimals() {
        assert_eq!(ValueFormatter::new(2).format(1500.0), "$1.50T");
        assert_eq!(ValueFormatter::new(1).format(2000.0), "$2.0T");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(ValueFormatter::new(1).format(1250.0), "$1.3T");
        assert_eq!(round_half_up(0.125, 2), 0.13);
    }

    #[test]
    fn long_units() {
        let fmt = ValueFormatter::new(1).with_units(UnitStyle::Long);
        assert_eq!(fmt.format(1500.0), "$1.5 Trillion");
        assert_eq!(fmt.format(731.0), "$731 Billion");
        assert_eq!(
            ValueFormatter::new(2)
                .with_units(UnitStyle::Long)
                .format(1460.0),
            "$1.46 Trillion"
        );
    }

    #[test]
    fn zero_and_non_finite() {
        let fmt = ValueFormatter::default();
        assert_eq!(fmt.format(0.0), "$0B");
        assert_eq!(fmt.format(-0.0), "$0B");
        assert_eq!(fmt.format(f64::NAN), "—");
        assert_eq!(fmt.format(f64::INFINITY), "—");
    }

    #[test]
    fn usd_thousands_separators() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(5_000), "$5,000");
        assert_eq!(format_usd(615_000), "$615,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn millions() {
        assert_eq!(format_millions(30.0), "$30M");
        assert_eq!(format_millions(210.0), "$210M");
        assert_eq!(format_millions(2.5), "$2.5M");
    }
}
