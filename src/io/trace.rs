use serde::{Deserialize, Serialize};

use crate::graph::ModulationSource;

/*
Trace Capture and Export
========================

The sampling harness: walk a source tree at a fixed rate over a fixed
duration and record the (time, value) pairs, plus the metadata the external
visualizer displays alongside the plot.

The JSON document is the visualizer's contract and uses its field names:

  {
    "Name": "...", "Description": "...",
    "Duration": 2.0, "SampleRate": 1000.0,
    "Samples": [{"Time": 0.0, "Value": 0.0}, ...]
  }

The PascalCase renaming lives here and only here; nothing inside the
generators knows or cares about the wire format.
*/

/// One recorded point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

/// A sampled signal plus its display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trace {
    pub name: String,
    pub description: String,
    pub duration: f64,
    pub sample_rate: f64,
    pub samples: Vec<Sample>,
}

impl Trace {
    /// Sample `source` at `time = i / sample_rate` for every `i` in
    /// `[0, duration * sample_rate)`.
    pub fn capture(
        name: &str,
        description: &str,
        source: &dyn ModulationSource,
        duration: f64,
        sample_rate: f64,
    ) -> Self {
        let count = (duration * sample_rate).max(0.0) as usize;
        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let time = i as f64 / sample_rate;
            samples.push(Sample {
                time,
                value: source.evaluate(time),
            });
        }

        Self {
            name: name.to_string(),
            description: description.to_string(),
            duration,
            sample_rate,
            samples,
        }
    }

    /// Serialize to the JSON document the visualizer reads.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
