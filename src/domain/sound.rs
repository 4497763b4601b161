//! Sound records and button colours

use crate::error::{Result, SoundboardError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

fn hex_colour_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
            .unwrap()
    })
}

/// Button background colour, each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColourChannels")]
pub struct Colour {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Colour {
    /// Create a colour, rejecting channels outside `[0, 1]`
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self> {
        for (name, value) in [
            ("red", red),
            ("green", green),
            ("blue", blue),
            ("alpha", alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SoundboardError::InvalidSound(format!(
                    "Colour channel {} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        Ok(Colour {
            red,
            green,
            blue,
            alpha,
        })
    }

    /// Hex form `#RRGGBBAA`, used for display
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.alpha)
        )
    }
}

/// Unchecked channels as read from storage or a bundle
#[derive(Deserialize)]
struct ColourChannels {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl TryFrom<ColourChannels> for Colour {
    type Error = SoundboardError;

    fn try_from(c: ColourChannels) -> Result<Self> {
        Colour::new(c.red, c.green, c.blue, c.alpha)
    }
}

impl FromStr for Colour {
    type Err = SoundboardError;

    /// Parse `r,g,b[,a]` floats or `#RRGGBB[AA]` hex
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(captures) = hex_colour_regex().captures(s) {
            let channel = |i: usize| -> f64 {
                captures
                    .get(i)
                    .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
                    .map_or(1.0, |v| f64::from(v) / 255.0)
            };
            return Colour::new(channel(1), channel(2), channel(3), channel(4));
        }

        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| invalid_colour(s))?;

        match parts.as_slice() {
            [r, g, b] => Colour::new(*r, *g, *b, 1.0),
            [r, g, b, a] => Colour::new(*r, *g, *b, *a),
            _ => Err(invalid_colour(s)),
        }
    }
}

fn invalid_colour(s: &str) -> SoundboardError {
    SoundboardError::InvalidSound(format!(
        "Invalid colour: '{}'. Use r,g,b[,a] (0-1) or #RRGGBB[AA]",
        s
    ))
}

/// One button on the soundboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
    /// Location of the audio file in the managed asset area
    pub sound_path: PathBuf,
    /// Base64-encoded image blob, stored inline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Sound {
    pub fn new(label: impl Into<String>, sound_path: PathBuf) -> Self {
        Sound {
            label: label.into(),
            colour: None,
            sound_path,
            image: None,
        }
    }

    pub fn with_colour(mut self, colour: Option<Colour>) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Display key: label followed by the asset's file name.
    ///
    /// Not unique; two buttons may share a label and a file.
    pub fn identity(&self) -> String {
        format!("{}{}", self.label, self.file_name())
    }

    /// Base name of the asset file
    pub fn file_name(&self) -> String {
        self.sound_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Extension of the asset file, empty if it has none
    pub fn extension(&self) -> String {
        extension_of(&self.sound_path)
    }

    /// A button needs something to show: a label or an image
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() && self.image.is_none() {
            return Err(SoundboardError::InvalidSound(
                "A sound needs a label unless it has an image".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_colour() {
        let colour: Colour = "1, 0, 0.5".parse().unwrap();
        assert_eq!(colour, Colour::new(1.0, 0.0, 0.5, 1.0).unwrap());

        let colour: Colour = "0,0,0,0.25".parse().unwrap();
        assert_eq!(colour.alpha, 0.25);
    }

    #[test]
    fn test_parse_hex_colour() {
        let colour: Colour = "#ff0000".parse().unwrap();
        assert_eq!(colour, Colour::new(1.0, 0.0, 0.0, 1.0).unwrap());

        let colour: Colour = "00ff0000".parse().unwrap();
        assert_eq!(colour.green, 1.0);
        assert_eq!(colour.alpha, 0.0);
    }

    #[test]
    fn test_parse_colour_rejects_garbage() {
        assert!("red".parse::<Colour>().is_err());
        assert!("1,0".parse::<Colour>().is_err());
        assert!("#ff00".parse::<Colour>().is_err());
    }

    #[test]
    fn test_colour_out_of_range() {
        let result = Colour::new(1.5, 0.0, 0.0, 1.0);
        assert!(matches!(result, Err(SoundboardError::InvalidSound(_))));
        assert!("0,0,-1".parse::<Colour>().is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_channel() {
        let json = r#"{"red": 5.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}"#;
        let err = serde_json::from_str::<Colour>(json).unwrap_err();
        assert!(err.to_string().contains("red"));

        let json = r#"{"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}"#;
        assert_eq!(
            serde_json::from_str::<Colour>(json).unwrap(),
            Colour::new(1.0, 0.0, 0.0, 1.0).unwrap()
        );
    }

    #[test]
    fn test_to_hex() {
        let colour = Colour::new(1.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(colour.to_hex(), "#ff0000ff");
    }

    #[test]
    fn test_identity_combines_label_and_file_name() {
        let sound = Sound::new("Boing", PathBuf::from("/data/sounds/abc.wav"));
        assert_eq!(sound.identity(), "Boingabc.wav");
        assert_eq!(sound.extension(), "wav");
    }

    #[test]
    fn test_validate_requires_label_or_image() {
        let sound = Sound::new("", PathBuf::from("a.wav"));
        assert!(sound.validate().is_err());

        let sound = sound.with_image(Some("aGk=".to_string()));
        assert!(sound.validate().is_ok());

        assert!(Sound::new("Boing", PathBuf::from("a.wav")).validate().is_ok());
    }

    #[test]
    fn test_serde_field_names() {
        let sound = Sound::new("Boing", PathBuf::from("/s/a.wav"))
            .with_colour(Some(Colour::new(1.0, 0.0, 0.0, 1.0).unwrap()));
        let json = serde_json::to_string(&sound).unwrap();
        assert!(json.contains("\"soundPath\":\"/s/a.wav\""));
        assert!(json.contains("\"colour\":{\"red\":1.0"));
        assert!(!json.contains("image"));

        let back: Sound = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sound);
    }
}
