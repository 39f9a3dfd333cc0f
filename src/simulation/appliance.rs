//! Appliance catalogue for the scheduling environment.
//!
//! The catalogue is fixed at construction and immutable for the lifetime of
//! the environment: three deferrable loads that can be started at a chosen
//! hour but then run to completion, plus one always-on base load
//! (the refrigerator) that contributes to every hour's power draw.

use serde::{Deserialize, Serialize};

/// A deferrable household load.
///
/// Once started, the appliance draws `power_kw` for `duration_hours`
/// consecutive hours and cannot be interrupted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSpec {
    /// Identifier, unique within a catalogue
    pub name: String,
    /// Power drawn while active, in kW
    pub power_kw: f64,
    /// Consecutive hours the appliance stays active once started
    pub duration_hours: u32,
}

impl ApplianceSpec {
    pub fn new(name: impl Into<String>, power_kw: f64, duration_hours: u32) -> Self {
        debug_assert!(power_kw > 0.0, "appliance power must be positive");
        debug_assert!(duration_hours > 0, "appliance duration must be positive");

        Self {
            name: name.into(),
            power_kw,
            duration_hours,
        }
    }
}

/// The full load catalogue of a household: deferrable appliances plus the
/// always-on base load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceCatalogue {
    deferrable: Vec<ApplianceSpec>,
    base_load_kw: f64,
}

impl Default for ApplianceCatalogue {
    fn default() -> Self {
        Self::new(
            vec![
                ApplianceSpec::new("washer", 1.0, 1),
                ApplianceSpec::new("water_heater", 1.5, 1),
                ApplianceSpec::new("ev_charger", 3.0, 4),
            ],
            0.2, // refrigerator
        )
    }
}

impl ApplianceCatalogue {
    pub fn new(deferrable: Vec<ApplianceSpec>, base_load_kw: f64) -> Self {
        debug_assert!(base_load_kw >= 0.0);
        debug_assert!(
            {
                let mut names: Vec<&str> = deferrable.iter().map(|a| a.name.as_str()).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "appliance names must be unique"
        );

        Self {
            deferrable,
            base_load_kw,
        }
    }

    /// Deferrable appliances, in catalogue order. Action vectors and
    /// observation components follow this ordering.
    pub fn deferrable(&self) -> &[ApplianceSpec] {
        &self.deferrable
    }

    /// Always-on load in kW, present every hour regardless of scheduling.
    pub fn base_load_kw(&self) -> f64 {
        self.base_load_kw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue() {
        let catalogue = ApplianceCatalogue::default();

        assert_eq!(catalogue.deferrable().len(), 3);
        assert_eq!(catalogue.base_load_kw(), 0.2);

        let ev = &catalogue.deferrable()[2];
        assert_eq!(ev.name, "ev_charger");
        assert_eq!(ev.power_kw, 3.0);
        assert_eq!(ev.duration_hours, 4);
    }

    #[test]
    fn test_catalogue_ordering_is_stable() {
        let catalogue = ApplianceCatalogue::default();
        let names: Vec<&str> = catalogue
            .deferrable()
            .iter()
            .map(|a| a.name.as_str())
            .collect();

        assert_eq!(names, vec!["washer", "water_heater", "ev_charger"]);
    }

    #[test]
    fn test_custom_catalogue() {
        let catalogue = ApplianceCatalogue::new(
            vec![ApplianceSpec::new("dishwasher", 2.5, 2)],
            0.1,
        );

        assert_eq!(catalogue.deferrable().len(), 1);
        assert_eq!(catalogue.deferrable()[0].duration_hours, 2);
        assert_eq!(catalogue.base_load_kw(), 0.1);
    }
}
