use std::collections::HashSet;

use log::info;

use crate::config::Config;
use crate::error::ValidationError;
use crate::model::{FeatureDataset, LabelDataset};

/// Feature and label files must hold the same number of records.
pub fn validate_data(
    features: &FeatureDataset,
    labels: &LabelDataset,
) -> Result<(), ValidationError> {
    if features.len() != labels.len() {
        return Err(ValidationError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }
    Ok(())
}

/// Every index in `[0, len)` resolves to a feature and a label record, each
/// feature record has `attribute_count` columns and each label is a declared
/// class value.
pub fn validate_alignment(
    features: &FeatureDataset,
    labels: &LabelDataset,
    config: &Config,
    attribute_count: usize,
) -> Result<(), ValidationError> {
    let classes: HashSet<&str> = config.class_values.iter().map(String::as_str).collect();

    for i in 0..features.len() {
        let feature_key = config.feature_key(i);
        let record = features
            .get(&feature_key)
            .ok_or_else(|| ValidationError::MissingFeature { key: feature_key.clone() })?;
        if record.cols != attribute_count {
            return Err(ValidationError::ColumnMismatch {
                key: feature_key,
                expected: attribute_count,
                found: record.cols,
            });
        }

        let label_key = config.label_key(i);
        let label = labels
            .get(&label_key)
            .ok_or_else(|| ValidationError::MissingLabel { key: label_key.clone() })?;
        if !classes.contains(label.as_str()) {
            return Err(ValidationError::UnknownClass {
                key: label_key,
                value: label.to_string(),
            });
        }
    }

    info!("Validated {} aligned records", features.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureRecord, LabelRecord};

    fn config() -> Config {
        Config {
            feature_key_format: "f_{}".into(),
            label_key_format: "l_{}".into(),
            class_values: vec!["Angry".into(), "Happy".into()],
            ..Config::default()
        }
    }

    fn dataset(n: usize) -> (FeatureDataset, LabelDataset) {
        let mut features = FeatureDataset::default();
        let mut labels = LabelDataset::default();
        for i in 0..n {
            features.insert(format!("f_{i}"), FeatureRecord::new(vec![i as f64, 1.0]));
            labels.insert(format!("l_{i}"), LabelRecord::new("Happy"));
        }
        (features, labels)
    }

    #[test]
    fn equal_lengths_pass() {
        let (features, labels) = dataset(3);
        assert_eq!(validate_data(&features, &labels), Ok(()));
    }

    #[test]
    fn unequal_lengths_fail_with_both_counts() {
        let (features, _) = dataset(3);
        let (_, labels) = dataset(2);
        assert_eq!(
            validate_data(&features, &labels),
            Err(ValidationError::LengthMismatch { features: 3, labels: 2 })
        );
    }

    #[test]
    fn aligned_records_pass() {
        let (features, labels) = dataset(4);
        assert_eq!(validate_alignment(&features, &labels, &config(), 2), Ok(()));
    }

    #[test]
    fn gap_in_feature_keys_is_reported() {
        let (_, labels) = dataset(2);
        let mut features = FeatureDataset::default();
        features.insert("f_0", FeatureRecord::new(vec![1.0, 2.0]));
        features.insert("f_7", FeatureRecord::new(vec![1.0, 2.0]));
        assert_eq!(
            validate_alignment(&features, &labels, &config(), 2),
            Err(ValidationError::MissingFeature { key: "f_1".into() })
        );
    }

    #[test]
    fn missing_label_key_is_reported() {
        let (features, _) = dataset(1);
        let mut labels = LabelDataset::default();
        labels.insert("label_0", LabelRecord::new("Happy"));
        assert_eq!(
            validate_alignment(&features, &labels, &config(), 2),
            Err(ValidationError::MissingLabel { key: "l_0".into() })
        );
    }

    #[test]
    fn column_count_must_match_header() {
        let (features, labels) = dataset(1);
        assert_eq!(
            validate_alignment(&features, &labels, &config(), 3),
            Err(ValidationError::ColumnMismatch { key: "f_0".into(), expected: 3, found: 2 })
        );
    }

    #[test]
    fn undeclared_class_is_reported() {
        let (features, mut labels) = dataset(1);
        labels.insert("l_0", LabelRecord::new("Bored"));
        assert_eq!(
            validate_alignment(&features, &labels, &config(), 2),
            Err(ValidationError::UnknownClass { key: "l_0".into(), value: "Bored".into() })
        );
    }
}
