use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::arff::write_arff_file;
use crate::config::Config;
use crate::error::Result;
use crate::reader::{read_features, read_labels};
use crate::scale::{scale_with, ScaleMethod};
use crate::validate::{validate_alignment, validate_data};

/// Inputs of one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub feature_file: PathBuf,
    pub label_file: PathBuf,
    pub output_file: PathBuf,
    pub scale: Option<ScaleMethod>,
    pub show_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub records: usize,
    pub attributes: usize,
    pub scale: Option<ScaleMethod>,
}

/// read features → read labels → validate → (scale) → write ARFF.
///
/// Nothing is written unless every record has passed validation (and scaling).
pub fn convert(opts: &ConvertOptions, config: &Config) -> Result<ConvertSummary> {
    info!(
        "Converting {:?} + {:?} → {:?}",
        opts.feature_file, opts.label_file, opts.output_file
    );

    let features = read_features(&opts.feature_file)?;
    let labels = read_labels(&opts.label_file)?;

    validate_data(&features, &labels)?;
    let attribute_types = config.attribute_types(&features)?;
    validate_alignment(&features, &labels, config, attribute_types.len())?;

    let features = match opts.scale {
        Some(method) => scale_with(features, method)?,
        None => features,
    };

    let bar = if opts.show_progress {
        let bar = ProgressBar::new(features.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows",
        ) {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    write_arff_file(
        &opts.output_file,
        &features,
        &labels,
        config,
        &attribute_types,
        &bar,
    )?;
    bar.finish_and_clear();

    Ok(ConvertSummary {
        records: features.len(),
        attributes: attribute_types.len(),
        scale: opts.scale,
    })
}
