//! Volume analysis: latest volume against its recent average.

use super::indicator::latest_finite;
use super::sma::{mean, sma_of_series};
use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

const HIGH_RATIO: f64 = 1.5;
const LOW_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeActivity {
    High,
    Low,
    Normal,
}

impl VolumeActivity {
    pub fn classify(ratio: f64) -> Self {
        if ratio > HIGH_RATIO {
            VolumeActivity::High
        } else if ratio < LOW_RATIO {
            VolumeActivity::Low
        } else {
            VolumeActivity::Normal
        }
    }
}

impl fmt::Display for VolumeActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VolumeActivity::High => "High Volume",
            VolumeActivity::Low => "Low Volume",
            VolumeActivity::Normal => "Normal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeReading {
    pub current: Option<f64>,
    pub average: Option<f64>,
    pub ratio: Option<f64>,
    pub activity: Option<VolumeActivity>,
}

/// Average over the last `window` bars, falling back to the whole series
/// when it is shorter. A zero average yields a neutral ratio of 1.0.
pub fn volume_analysis(series: &PriceSeries, window: usize) -> VolumeReading {
    let volumes = series.volumes();
    let current = volumes.last().copied();

    let average = if volumes.len() >= window {
        latest_finite(&sma_of_series(&volumes, window))
    } else {
        mean(&volumes)
    };

    let ratio = match (current, average) {
        (Some(cur), Some(avg)) if avg > 0.0 => Some(cur / avg),
        (Some(_), Some(_)) => Some(1.0),
        _ => None,
    };

    VolumeReading {
        current,
        average,
        ratio,
        activity: ratio.map(VolumeActivity::classify),
    }
}
