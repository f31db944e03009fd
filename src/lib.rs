//! Convert paired feature/label JSON files into an ARFF relation.
//!
//! ```text
//!  features.json   labels.json        config.json
//!        │              │                  │
//!        ▼              ▼                  │
//!   ┌─────────────────────────┐            │
//!   │ reader                  │ typed records
//!   └─────────────────────────┘            │
//!        │                                 │
//!        ▼                                 ▼
//!   ┌─────────────────────────┐   ┌──────────────┐
//!   │ validate                │◄──│ config       │
//!   └─────────────────────────┘   └──────────────┘
//!        │
//!        ▼
//!   ┌─────────────────────────┐
//!   │ scale (optional)        │ per-record minmax / standard
//!   └─────────────────────────┘
//!        │
//!        ▼
//!   ┌─────────────────────────┐
//!   │ arff                    │ @RELATION / @ATTRIBUTE / @DATA
//!   └─────────────────────────┘
//! ```

pub mod arff;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reader;
pub mod scale;
pub mod validate;

pub use config::Config;
pub use error::{ConvertError, ValidationError};
pub use model::{FeatureDataset, FeatureRecord, LabelDataset, LabelRecord};
pub use pipeline::{convert, ConvertOptions, ConvertSummary};
pub use scale::ScaleMethod;
