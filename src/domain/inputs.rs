// ============================================================
// Layer 3 — Slider Inputs
// ============================================================
// The three user-controlled readings. Each one is a whole
// number inside a fixed range with a fixed default:
//
//   Temperature (°C)    0 – 40    default 20
//   Humidity (%)        0 – 100   default 50
//   Wind Speed (km/h)   0 – 50    default 10
//
// Values outside a range cannot be constructed, so the
// classifier never sees an out-of-bounds request.

use crate::domain::error::{FireRiskError, Result};
use crate::domain::observation::{FeatureName, FeatureVector};

/// Bounds and default of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    pub field:   &'static str,
    pub label:   &'static str,
    pub min:     u32,
    pub max:     u32,
    pub default: u32,
}

pub const TEMPERATURE: SliderSpec = SliderSpec {
    field: "temperature", label: "Temperature (°C)", min: 0, max: 40, default: 20,
};

pub const HUMIDITY: SliderSpec = SliderSpec {
    field: "humidity", label: "Humidity (%)", min: 0, max: 100, default: 50,
};

pub const WIND_SPEED: SliderSpec = SliderSpec {
    field: "wind_speed", label: "Wind Speed (km/h)", min: 0, max: 50, default: 10,
};

impl SliderSpec {
    pub fn for_feature(feature: FeatureName) -> &'static SliderSpec {
        match feature {
            FeatureName::Temperature => &TEMPERATURE,
            FeatureName::Humidity    => &HUMIDITY,
            FeatureName::WindSpeed   => &WIND_SPEED,
        }
    }

    pub fn check(&self, value: u32) -> Result<u32> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(FireRiskError::InputOutOfRange {
                field: self.field,
                min:   self.min,
                max:   self.max,
                value,
            })
        }
    }
}

// ─── SliderInputs ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderInputs {
    temperature: u32,
    humidity:    u32,
    wind_speed:  u32,
}

impl SliderInputs {
    pub fn new(temperature: u32, humidity: u32, wind_speed: u32) -> Result<Self> {
        Ok(Self {
            temperature: TEMPERATURE.check(temperature)?,
            humidity:    HUMIDITY.check(humidity)?,
            wind_speed:  WIND_SPEED.check(wind_speed)?,
        })
    }

    pub fn get(&self, feature: FeatureName) -> u32 {
        match feature {
            FeatureName::Temperature => self.temperature,
            FeatureName::Humidity    => self.humidity,
            FeatureName::WindSpeed   => self.wind_speed,
        }
    }

    /// Move one slider. On error the previous value is kept.
    pub fn set(&mut self, feature: FeatureName, value: u32) -> Result<()> {
        let value = SliderSpec::for_feature(feature).check(value)?;
        match feature {
            FeatureName::Temperature => self.temperature = value,
            FeatureName::Humidity    => self.humidity    = value,
            FeatureName::WindSpeed   => self.wind_speed  = value,
        }
        Ok(())
    }

    /// Single-row classifier input: [temperature, humidity, wind_speed].
    pub fn features(&self) -> FeatureVector {
        [self.temperature as f64, self.humidity as f64, self.wind_speed as f64]
    }
}

impl Default for SliderInputs {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE.default,
            humidity:    HUMIDITY.default,
            wind_speed:  WIND_SPEED.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = SliderInputs::default();
        assert_eq!(inputs.features(), [20.0, 50.0, 10.0]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(SliderInputs::new(0, 0, 0).is_ok());
        assert!(SliderInputs::new(40, 100, 50).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            SliderInputs::new(41, 50, 10),
            Err(FireRiskError::InputOutOfRange { field: "temperature", .. })
        ));
        assert!(matches!(
            SliderInputs::new(20, 101, 10),
            Err(FireRiskError::InputOutOfRange { field: "humidity", .. })
        ));
        assert!(matches!(
            SliderInputs::new(20, 50, 51),
            Err(FireRiskError::InputOutOfRange { field: "wind_speed", .. })
        ));
    }

    #[test]
    fn test_failed_set_keeps_value() {
        let mut inputs = SliderInputs::default();
        assert!(inputs.set(FeatureName::WindSpeed, 70).is_err());
        assert_eq!(inputs.get(FeatureName::WindSpeed), 10);
        inputs.set(FeatureName::WindSpeed, 30).unwrap();
        assert_eq!(inputs.features(), [20.0, 50.0, 30.0]);
    }
}
