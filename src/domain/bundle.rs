//! Portable soundboard bundle (`.stosb`)
//!
//! A bundle is a JSON document carrying every sound's metadata together with
//! its audio bytes, so it can be moved between machines as a single file:
//!
//! ```json
//! {
//!   "sounds": [
//!     {
//!       "label": "Boing",
//!       "colour": { "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 },
//!       "soundData": "<base64>",
//!       "soundExtension": "wav",
//!       "image": "<base64, optional>"
//!     }
//!   ],
//!   "exportDate": "2025-01-17T10:00:00Z",
//!   "version": "1.0"
//! }
//! ```
//!
//! Decoding ignores unknown fields and rejects colour channels outside
//! `[0, 1]`. A version other than [`BUNDLE_VERSION`] is accepted as long as
//! the document has the expected shape.

use crate::domain::sound::Colour;
use crate::error::{Result, SoundboardError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use tracing::warn;

/// Format version written by this crate
pub const BUNDLE_VERSION: &str = "1.0";

/// File extension for exported bundles
pub const BUNDLE_EXTENSION: &str = "stosb";

/// One sound inside a bundle, audio included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
    #[serde(with = "base64_bytes")]
    pub sound_data: Vec<u8>,
    pub sound_extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A whole exported soundboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub sounds: Vec<BundleEntry>,
    #[serde(with = "iso8601")]
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl Bundle {
    /// Create a bundle stamped with the current format version
    pub fn new(sounds: Vec<BundleEntry>, export_date: DateTime<Utc>) -> Self {
        Bundle {
            sounds,
            export_date,
            version: BUNDLE_VERSION.to_string(),
        }
    }
}

/// Serialize a bundle to its on-disk form. Performs no I/O.
pub fn encode(bundle: &Bundle) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(bundle)?)
}

/// Parse a bundle.
///
/// Malformed JSON yields [`SoundboardError::BundleDecode`]; well-formed JSON
/// with missing or mistyped fields yields [`SoundboardError::BundleFormat`].
pub fn decode(bytes: &[u8]) -> Result<Bundle> {
    let bundle: Bundle = serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        Category::Data => SoundboardError::BundleFormat(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => {
            SoundboardError::BundleDecode(e.to_string())
        }
    })?;

    if bundle.version != BUNDLE_VERSION {
        warn!(
            version = %bundle.version,
            expected = BUNDLE_VERSION,
            "bundle has an unrecognized version, reading it as {}",
            BUNDLE_VERSION
        );
    }

    Ok(bundle)
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| serde::de::Error::custom(format!("invalid soundData: {}", e)))
    }
}

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid exportDate '{}': {}", raw, e)))
    }
}
