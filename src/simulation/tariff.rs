//! Time-of-use tariff table.
//!
//! Built once from a deterministic daily rule: cheap at night, expensive at
//! the evening peak, flat otherwise. The table is constant across a whole
//! episode and across episodes.

use serde::{Deserialize, Serialize};

/// Hours in one simulated day; also the episode horizon.
pub const HOURS_PER_DAY: usize = 24;

/// Per-kWh rates for the three daily price bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffRates {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Default for TariffRates {
    fn default() -> Self {
        Self {
            low: 0.5,
            mid: 1.0,
            high: 2.0,
        }
    }
}

/// An ordered table of 24 positive prices, one per hour-of-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffTable {
    prices: Vec<f64>,
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::new(TariffRates::default())
    }
}

impl TariffTable {
    /// Build the daily table: `low` before 06:00 and from 22:00, `high`
    /// during the 17:00-21:00 evening peak, `mid` otherwise.
    pub fn new(rates: TariffRates) -> Self {
        let prices = (0..HOURS_PER_DAY)
            .map(|h| {
                if h < 6 || h >= 22 {
                    rates.low
                } else if (17..=21).contains(&h) {
                    rates.high
                } else {
                    rates.mid
                }
            })
            .collect();

        Self { prices }
    }

    /// Price for the given hour-of-day (0-23).
    pub fn price(&self, hour: usize) -> f64 {
        self.prices[hour]
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn min_price(&self) -> f64 {
        self.prices.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_price(&self) -> f64 {
        self.prices
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Min-max normalized price for the given hour, in [0, 1].
    ///
    /// A flat table (no price spread) normalizes to 0.
    pub fn normalized(&self, hour: usize) -> f64 {
        let min = self.min_price();
        let span = self.max_price() - min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.price(hour) - min) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_boundaries() {
        let tariff = TariffTable::default();

        assert_eq!(tariff.price(0), 0.5);
        assert_eq!(tariff.price(5), 0.5);
        assert_eq!(tariff.price(6), 1.0);
        assert_eq!(tariff.price(16), 1.0);
        assert_eq!(tariff.price(17), 2.0);
        assert_eq!(tariff.price(21), 2.0);
        assert_eq!(tariff.price(22), 0.5);
        assert_eq!(tariff.price(23), 0.5);
    }

    #[test]
    fn test_table_has_one_price_per_hour() {
        let tariff = TariffTable::default();
        assert_eq!(tariff.prices().len(), HOURS_PER_DAY);
        assert!(tariff.prices().iter().all(|p| *p > 0.0));
    }

    #[test]
    fn test_normalization_range() {
        let tariff = TariffTable::default();

        assert_eq!(tariff.min_price(), 0.5);
        assert_eq!(tariff.max_price(), 2.0);

        // Cheapest hour normalizes to 0, peak hour to 1.
        assert_eq!(tariff.normalized(0), 0.0);
        assert_eq!(tariff.normalized(18), 1.0);

        let mid = tariff.normalized(12);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_flat_table_normalizes_to_zero() {
        let tariff = TariffTable::new(TariffRates {
            low: 1.0,
            mid: 1.0,
            high: 1.0,
        });

        for h in 0..HOURS_PER_DAY {
            assert_eq!(tariff.normalized(h), 0.0);
        }
    }

    #[test]
    fn test_custom_rates() {
        let tariff = TariffTable::new(TariffRates {
            low: 0.3,
            mid: 0.8,
            high: 1.6,
        });

        assert_eq!(tariff.price(3), 0.3);
        assert_eq!(tariff.price(12), 0.8);
        assert_eq!(tariff.price(19), 1.6);
    }
}
