///! Synthetic sensor oracle
///!
///! Produces the `{temperature, humidity, resource}` readings behind
///! `GET /random-sensor`. Purely synthetic, read-only: it never touches the
///! spacecraft record and may be sampled concurrently with anything else.

use anyhow::{Result, anyhow};
use rand::Rng;
use rand::seq::SliceRandom;

use helm_common::SensorReading;

/// Exterior temperature range in degrees Celsius.
const TEMPERATURE_MIN: f64 = -60.0;
const TEMPERATURE_MAX: f64 = 40.0;

/// Resources the survey instruments can report.
const RESOURCE_CATALOG: &[&str] = &[
    "iron",
    "nickel",
    "silica",
    "water-ice",
    "regolith",
    "helium-3",
];

/// Synthetic reading generator with a fixed resource catalog.
#[derive(Debug, Clone)]
pub struct SensorOracle {
    catalog: Vec<String>,
}

impl SensorOracle {
    pub fn new() -> Self {
        Self {
            catalog: RESOURCE_CATALOG.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[cfg(test)]
    fn with_catalog(catalog: Vec<String>) -> Self {
        Self { catalog }
    }

    /// Draw one synthetic reading.
    pub fn read(&self) -> Result<SensorReading> {
        let mut rng = rand::thread_rng();

        let temperature = round1(rng.gen_range(TEMPERATURE_MIN..=TEMPERATURE_MAX));
        let humidity = round1(rng.gen_range(0.0..=100.0));
        let resource = self
            .catalog
            .choose(&mut rng)
            .ok_or_else(|| anyhow!("resource catalog is empty"))?
            .clone();

        Ok(SensorReading {
            temperature,
            humidity,
            resource,
        })
    }
}

impl Default for SensorOracle {
    fn default() -> Self {
        Self::new()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_stay_in_range() {
        let oracle = SensorOracle::new();
        for _ in 0..200 {
            let reading = oracle.read().unwrap();
            assert!((TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&reading.temperature));
            assert!((0.0..=100.0).contains(&reading.humidity));
            assert!(RESOURCE_CATALOG.contains(&reading.resource.as_str()));
        }
    }

    #[test]
    fn test_empty_catalog_errors() {
        let oracle = SensorOracle::with_catalog(Vec::new());
        assert!(oracle.read().is_err());
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(-59.96), -60.0);
        assert_eq!(round1(0.05), 0.1);
    }
}
