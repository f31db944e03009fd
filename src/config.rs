use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::model::FeatureDataset;

/// Index placeholder inside a key template.
const PLACEHOLDER: &str = "{}";

/// Describes the relation written to the ARFF header and how records are
/// looked up in the feature/label files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relation_name: String,
    /// One attribute type per feature column, in column order. When empty the
    /// column count is taken from the first feature record.
    pub feature_data_types: Vec<String>,
    /// Type used for every column when `feature_data_types` is empty.
    pub default_data_type: String,
    pub class_name: String,
    pub class_values: Vec<String>,
    /// Key of feature record `i`, with `{}` standing for `i`.
    pub feature_key_format: String,
    /// Key of label record `i`, with `{}` standing for `i`.
    pub label_key_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relation_name: "facialexpressionrecognition".to_string(),
            feature_data_types: Vec::new(),
            default_data_type: "real".to_string(),
            class_name: "duygu".to_string(),
            class_values: ["Angry", "Disgusted", "Fear", "Happy", "Sad", "Surprised"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            feature_key_format: "image_feature_{}".to_string(),
            label_key_format: "image_label_{}".to_string(),
        }
    }
}

impl Config {
    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|e| {
            ConvertError::Config(format!("malformed {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| io_err(e.into()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.relation_name.trim().is_empty() {
            return Err(ConvertError::Config("relation_name is empty".into()));
        }
        if self.class_name.trim().is_empty() {
            return Err(ConvertError::Config("class_name is empty".into()));
        }
        if self.class_values.is_empty() {
            return Err(ConvertError::Config("class_values is empty".into()));
        }

        let mut seen = HashSet::new();
        for value in &self.class_values {
            if value.is_empty() {
                return Err(ConvertError::Config("class_values contains an empty value".into()));
            }
            if !seen.insert(value.as_str()) {
                return Err(ConvertError::Config(format!(
                    "class value {value:?} is declared twice"
                )));
            }
        }

        if let Some(pos) = self.feature_data_types.iter().position(|t| t.trim().is_empty()) {
            return Err(ConvertError::Config(format!(
                "feature_data_types[{pos}] is empty"
            )));
        }
        if self.feature_data_types.is_empty() && self.default_data_type.trim().is_empty() {
            return Err(ConvertError::Config("default_data_type is empty".into()));
        }

        check_key_format("feature_key_format", &self.feature_key_format)?;
        check_key_format("label_key_format", &self.label_key_format)?;
        Ok(())
    }

    pub fn feature_key(&self, index: usize) -> String {
        self.feature_key_format.replacen(PLACEHOLDER, &index.to_string(), 1)
    }

    pub fn label_key(&self, index: usize) -> String {
        self.label_key_format.replacen(PLACEHOLDER, &index.to_string(), 1)
    }

    /// Attribute types for the header, one per feature column.
    ///
    /// Configured types win; otherwise every column of record `0` gets
    /// `default_data_type`.
    pub fn attribute_types(&self, features: &FeatureDataset) -> Result<Vec<String>> {
        if !self.feature_data_types.is_empty() {
            return Ok(self.feature_data_types.clone());
        }
        if features.is_empty() {
            return Ok(Vec::new());
        }

        let first_key = self.feature_key(0);
        let first = features.get(&first_key).ok_or_else(|| {
            ConvertError::Config(format!(
                "feature_data_types is not set and record {first_key} is missing"
            ))
        })?;
        Ok(vec![self.default_data_type.clone(); first.cols])
    }
}

/// A key template must contain exactly one `{}` and no other brace group.
fn check_key_format(field: &str, template: &str) -> Result<()> {
    let groups = Regex::new(r"\{[^{}]*\}")
        .map_err(|e| ConvertError::Config(format!("placeholder pattern: {e}")))?;
    let found: Vec<&str> = groups.find_iter(template).map(|m| m.as_str()).collect();

    match found.as_slice() {
        [PLACEHOLDER] => Ok(()),
        [] => Err(ConvertError::Config(format!(
            "{field} {template:?} has no {PLACEHOLDER} placeholder"
        ))),
        _ => Err(ConvertError::Config(format!(
            "{field} {template:?} must contain exactly one {PLACEHOLDER} placeholder, found {found:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeatureRecord;

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn keys_substitute_index() {
        let config = Config::default();
        assert_eq!(config.feature_key(0), "image_feature_0");
        assert_eq!(config.label_key(12), "image_label_12");
    }

    #[test]
    fn key_format_needs_exactly_one_placeholder() {
        let mut config = Config::default();
        config.feature_key_format = "image_feature".into();
        assert!(matches!(config.validate(), Err(ConvertError::Config(_))));

        config.feature_key_format = "f_{}_{}".into();
        assert!(matches!(config.validate(), Err(ConvertError::Config(_))));

        config.feature_key_format = "f_{0}".into();
        assert!(matches!(config.validate(), Err(ConvertError::Config(_))));

        config.feature_key_format = "f_{}".into();
        config.validate().unwrap();
    }

    #[test]
    fn duplicate_class_values_are_rejected() {
        let mut config = Config::default();
        config.class_values = vec!["Happy".into(), "Sad".into(), "Happy".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Happy"));
    }

    #[test]
    fn empty_class_values_are_rejected() {
        let mut config = Config::default();
        config.class_values.clear();
        assert!(matches!(config.validate(), Err(ConvertError::Config(_))));
    }

    #[test]
    fn attribute_types_prefer_configured_list() {
        let mut config = Config::default();
        config.feature_data_types = vec!["real".into(), "integer".into()];
        let types = config.attribute_types(&FeatureDataset::default()).unwrap();
        assert_eq!(types, vec!["real", "integer"]);
    }

    #[test]
    fn attribute_types_fall_back_to_first_record() {
        let config = Config::default();
        let mut features = FeatureDataset::default();
        features.insert("image_feature_0", FeatureRecord::new(vec![0.1, 0.2, 0.3]));
        let types = config.attribute_types(&features).unwrap();
        assert_eq!(types, vec!["real"; 3]);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"relation_name": "faces", "class_values": ["A", "B"]}"#)
                .unwrap();
        assert_eq!(config.relation_name, "faces");
        assert_eq!(config.class_name, "duygu");
        assert_eq!(config.feature_key_format, "image_feature_{}");
    }
}
