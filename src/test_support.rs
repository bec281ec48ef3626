// Shared fixtures for unit tests.
//
// Synthetic observations follow one rule: fire (area > 0) exactly
// when humidity is below 40. Temperature and wind are noise, so a
// model trained on them leans on humidity and ignores wind.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::observation::{Observation, ObservationTable};

pub const HUMIDITY_THRESHOLD: f64 = 40.0;

pub fn synthetic_observations(n: usize, seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let relative_humidity = rng.gen_range(0.0..100.0);
            let burned_area = if relative_humidity < HUMIDITY_THRESHOLD {
                rng.gen_range(0.1..50.0)
            } else {
                0.0
            };
            Observation {
                temperature: rng.gen_range(0.0..40.0),
                relative_humidity,
                wind_speed: rng.gen_range(0.0..50.0),
                burned_area,
            }
        })
        .collect()
}

pub fn synthetic_table(n: usize, seed: u64) -> ObservationTable {
    ObservationTable::from_observations(synthetic_observations(n, seed))
}

/// Write observations in the forestfires.csv layout, including a few
/// columns the loader does not model.
pub fn write_csv(dir: &Path, name: &str, observations: &[Observation]) -> PathBuf {
    let mut text = String::from("X,Y,month,day,temp,RH,wind,rain,area\n");
    for (i, o) in observations.iter().enumerate() {
        text.push_str(&format!(
            "{},{},aug,fri,{},{},{},0.0,{}\n",
            i % 9 + 1,
            i % 7 + 2,
            o.temperature,
            o.relative_humidity,
            o.wind_speed,
            o.burned_area,
        ));
    }
    let path = dir.join(name);
    fs::write(&path, text).expect("write test csv");
    path
}
