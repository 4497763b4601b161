//! CLI command definitions

use crate::domain::Colour;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "soundboard")]
#[command(about = "Grid of buttons that play short audio clips", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new soundboard
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List sounds in display order
    List,

    /// Add a sound
    Add {
        /// Audio file to copy into the soundboard
        audio: Option<PathBuf>,

        /// Button label (may be empty when an image is given)
        #[arg(short, long, default_value = "")]
        label: String,

        /// Button colour: r,g,b[,a] (0-1) or #RRGGBB[AA]
        #[arg(short, long)]
        colour: Option<Colour>,

        /// Image file shown on the button
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Edit a sound
    Edit {
        /// Position of the sound (1-based, as shown by list)
        index: usize,

        #[arg(short, long)]
        label: Option<String>,

        #[arg(short, long, conflicts_with = "no_colour")]
        colour: Option<Colour>,

        /// Remove the colour
        #[arg(long)]
        no_colour: bool,

        #[arg(short, long, conflicts_with = "no_image")]
        image: Option<PathBuf>,

        /// Remove the image
        #[arg(long)]
        no_image: bool,

        /// Replace the audio file
        #[arg(short, long)]
        audio: Option<PathBuf>,
    },

    /// Remove a sound and its audio file
    Remove {
        /// Position of the sound (1-based)
        index: usize,
    },

    /// Move a sound to another position
    Move {
        /// Current position (1-based)
        from: usize,

        /// New position (1-based)
        to: usize,
    },

    /// Play a sound
    Play {
        /// Position of the sound (1-based)
        index: usize,
    },

    /// Export the soundboard to a .stosb bundle
    Export {
        /// Output file (default: soundboard-YYYY-MM-DD.stosb)
        output: Option<PathBuf>,
    },

    /// Import sounds from a .stosb bundle
    Import {
        /// Bundle file
        bundle: Option<PathBuf>,
    },

    /// List audio files no sound refers to
    Prune {
        /// Delete them
        #[arg(long)]
        delete: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
