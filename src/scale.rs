//! Per-record normalization of feature vectors.
//!
//! Each record is rescaled against its own statistics (min/max or mean/std),
//! never against the whole dataset. Values of different records are therefore
//! not comparable after scaling.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::{info, warn};

use crate::error::{ConvertError, Result};
use crate::model::FeatureDataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleMethod {
    /// (x - min) / (max - min)
    #[value(name = "minmax")]
    MinMax,
    /// (x - mean) / std, population standard deviation
    #[value(name = "standard")]
    Standard,
}

impl FromStr for ScaleMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "minmax" => Ok(ScaleMethod::MinMax),
            "standard" => Ok(ScaleMethod::Standard),
            other => Err(format!("unknown scaling method {other:?}")),
        }
    }
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleMethod::MinMax => write!(f, "minmax"),
            ScaleMethod::Standard => write!(f, "standard"),
        }
    }
}

/// Scale by method name. An unrecognized name leaves the data untouched.
pub fn scale_features(features: FeatureDataset, method: &str) -> Result<FeatureDataset> {
    match method.parse::<ScaleMethod>() {
        Ok(m) => scale_with(features, m),
        Err(e) => {
            warn!("{e}; leaving features unscaled");
            Ok(features)
        }
    }
}

/// Rescale every record in place and hand the dataset back.
///
/// A record whose values are all equal cannot be rescaled (zero range or
/// zero deviation) and aborts with a computation error naming the record.
pub fn scale_with(mut features: FeatureDataset, method: ScaleMethod) -> Result<FeatureDataset> {
    for (key, rec) in features.iter_mut() {
        if rec.data.is_empty() {
            continue;
        }
        let outcome = match method {
            ScaleMethod::MinMax => min_max(&mut rec.data),
            ScaleMethod::Standard => standardize(&mut rec.data),
        };
        outcome.map_err(|reason| ConvertError::Computation {
            key: key.clone(),
            reason,
        })?;
    }

    info!("Scaled {} feature records ({method})", features.len());
    Ok(features)
}

fn min_max(data: &mut [f64]) -> std::result::Result<(), String> {
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;
    if range == 0.0 || !range.is_finite() {
        return Err(format!("min-max range is {range} (min {lo}, max {hi})"));
    }

    for x in data.iter_mut() {
        *x = (*x - lo) / range;
    }
    Ok(())
}

fn standardize(data: &mut [f64]) -> std::result::Result<(), String> {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let std = (data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
    if std == 0.0 || !std.is_finite() {
        return Err(format!("standard deviation is {std} (mean {mean})"));
    }

    for x in data.iter_mut() {
        *x = (*x - mean) / std;
    }
    Ok(())
}
