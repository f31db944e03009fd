use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indicatif::ProgressBar;
use log::info;

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::model::{FeatureDataset, LabelDataset};

/// Serialize the relation to `out`:
///
/// ```text
/// @RELATION <relation>
///
/// @ATTRIBUTE feature0 <type0>
/// ...
/// @ATTRIBUTE <class> {<v1>,<v2>,...}
///
/// @DATA
/// <x0>,<x1>,...,<label>
/// ```
///
/// Records are emitted in index order `0..features.len()`; callers validate
/// alignment first, a missing key here is reported as `InvalidData`.
pub fn write_arff<W: Write>(
    out: &mut W,
    features: &FeatureDataset,
    labels: &LabelDataset,
    config: &Config,
    attribute_types: &[String],
    progress: &ProgressBar,
) -> io::Result<()> {
    writeln!(out, "@RELATION {}", quote_nominal(&config.relation_name))?;
    writeln!(out)?;

    for (i, dtype) in attribute_types.iter().enumerate() {
        writeln!(out, "@ATTRIBUTE feature{i} {dtype}")?;
    }
    let classes: Vec<String> = config.class_values.iter().map(|v| quote_nominal(v)).collect();
    writeln!(
        out,
        "@ATTRIBUTE {} {{{}}}",
        quote_nominal(&config.class_name),
        classes.join(",")
    )?;
    writeln!(out)?;

    writeln!(out, "@DATA")?;
    for i in 0..features.len() {
        let feature_key = config.feature_key(i);
        let label_key = config.label_key(i);
        let (Some(record), Some(label)) = (features.get(&feature_key), labels.get(&label_key))
        else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("record {i} missing ({feature_key} / {label_key})"),
            ));
        };

        let row: Vec<String> = record.data.iter().map(|x| x.to_string()).collect();
        if row.is_empty() {
            writeln!(out, "{}", quote_nominal(label.as_str()))?;
        } else {
            writeln!(out, "{},{}", row.join(","), quote_nominal(label.as_str()))?;
        }
        progress.inc(1);
    }

    out.flush()
}

/// Create (or truncate) `path` and write the relation into it.
///
/// A failure part-way leaves a partial file behind.
pub fn write_arff_file(
    path: &Path,
    features: &FeatureDataset,
    labels: &LabelDataset,
    config: &Config,
    attribute_types: &[String],
    progress: &ProgressBar,
) -> Result<()> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_arff(&mut writer, features, labels, config, attribute_types, progress)
        .map_err(io_err)?;

    info!("Wrote {} data rows → {}", features.len(), path.display());
    Ok(())
}

/// ARFF nominal values and names need single quotes once they contain
/// whitespace or one of `,'"{}%`.
pub fn quote_nominal(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '\'' | '"' | '{' | '}' | '%'));
    if needs_quotes {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    } else {
        value.to_string()
    }
}
