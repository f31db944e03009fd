use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::model::{FeatureDataset, FeatureRecord, LabelDataset, LabelRecord};

/// Load any JSON document from `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a feature file: `{ "<key>": { "cols": n, "data": [..n numbers..] }, ... }`.
pub fn read_features(path: &Path) -> Result<FeatureDataset> {
    let records: HashMap<String, FeatureRecord> = read_json(path)?;

    for (key, rec) in &records {
        if rec.data.len() != rec.cols {
            return Err(ConvertError::Shape {
                path: path.to_path_buf(),
                key: key.clone(),
                reason: format!("declares {} cols but holds {} values", rec.cols, rec.data.len()),
            });
        }
    }

    info!("Loaded {} feature records from {}", records.len(), path.display());
    Ok(FeatureDataset::new(records))
}

/// Load a label file: `{ "<key>": "<label>", ... }`.
pub fn read_labels(path: &Path) -> Result<LabelDataset> {
    let raw: HashMap<String, Value> = read_json(path)?;

    let records = raw
        .into_iter()
        .map(|(key, val)| match LabelRecord::from_json(&val) {
            Some(label) => Ok((key, label)),
            None => Err(ConvertError::Shape {
                path: path.to_path_buf(),
                key,
                reason: format!("label must be a string or number, found {val}"),
            }),
        })
        .collect::<Result<HashMap<_, _>>>()?;

    info!("Loaded {} label records from {}", records.len(), path.display());
    Ok(LabelDataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn reads_feature_records() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "features.json",
            r#"{"f_0": {"cols": 2, "data": [1, 3.5]}, "f_1": {"cols": 2, "data": [0, -1]}}"#,
        );
        let features = read_features(&path).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features.get("f_0").unwrap().data, vec![1.0, 3.5]);
    }

    #[test]
    fn rejects_cols_data_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "features.json", r#"{"f_0": {"cols": 3, "data": [1, 2]}}"#);
        match read_features(&path) {
            Err(ConvertError::Shape { key, .. }) => assert_eq!(key, "f_0"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_record_without_data() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "features.json", r#"{"f_0": {"cols": 3}}"#);
        assert!(matches!(read_features(&path), Err(ConvertError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(read_labels(&path), Err(ConvertError::Read { .. })));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "labels.json", "{\"l_0\": \"Happy\"");
        assert!(matches!(read_labels(&path), Err(ConvertError::Parse { .. })));
    }

    #[test]
    fn reads_string_and_numeric_labels() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "labels.json", r#"{"l_0": "Happy", "l_1": 4}"#);
        let labels = read_labels(&path).unwrap();
        assert_eq!(labels.get("l_0").unwrap().as_str(), "Happy");
        assert_eq!(labels.get("l_1").unwrap().as_str(), "4");
    }

    #[test]
    fn rejects_object_labels() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "labels.json", r#"{"l_0": {"label": "Happy"}}"#);
        assert!(matches!(read_labels(&path), Err(ConvertError::Shape { .. })));
    }
}
