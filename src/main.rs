use chrono::Local;
use clap::Parser;
use soundboard::application::export::default_export_file_name;
use soundboard::application::init::init;
use soundboard::application::list_sounds::{list_sounds, move_sound};
use soundboard::application::{
    AddSoundService, ConfigService, EditSoundService, ExportService, ImportService, NewSound,
    PlaySoundService, PruneService, RemoveSoundService, SoundEdit,
};
use soundboard::cli::{format_import_summary, format_orphans, format_sound_list, Cli, Commands};
use soundboard::error::{Result, SoundboardError};
use soundboard::infrastructure::{ArgumentSelector, FileSystemRepository};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SOUNDBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Convert a 1-based position from the command line
fn position(index: usize) -> Result<usize> {
    index
        .checked_sub(1)
        .ok_or_else(|| SoundboardError::Config("Positions start at 1".to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let config = init(&path)?;
            println!("Initialized soundboard at {}", path.display());
            println!("Sounds directory: {}", config.asset_dir_in(&path).display());
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            print!("{}", format_sound_list(&list_sounds(&repo)?));
            Ok(())
        }
        Commands::Add {
            audio,
            label,
            colour,
            image,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = AddSoundService::new(repo);
            let new = NewSound {
                label,
                colour,
                image,
            };

            match service.execute_selected(&ArgumentSelector::from(audio), new)? {
                Some(sound) => println!("Added '{}' ({})", sound.label, sound.file_name()),
                None => println!("No audio file selected"),
            }
            Ok(())
        }
        Commands::Edit {
            index,
            label,
            colour,
            no_colour,
            image,
            no_image,
            audio,
        } => {
            let repo = FileSystemRepository::discover()?;
            let edit = SoundEdit {
                label,
                colour: if no_colour { Some(None) } else { colour.map(Some) },
                image: if no_image { Some(None) } else { image.map(Some) },
                audio,
            };

            let sound = EditSoundService::new(repo).execute(position(index)?, edit)?;
            println!("Updated '{}'", sound.label);
            Ok(())
        }
        Commands::Remove { index } => {
            let repo = FileSystemRepository::discover()?;
            let removed = RemoveSoundService::new(repo).execute(position(index)?)?;

            if let Some(e) = removed.asset_error {
                eprintln!("Warning: audio file was not deleted: {}", e);
            }
            println!("Removed '{}'", removed.sound.label);
            Ok(())
        }
        Commands::Move { from, to } => {
            let repo = FileSystemRepository::discover()?;
            move_sound(&repo, position(from)?, position(to)?)?;
            println!("Moved sound {} to position {}", from, to);
            Ok(())
        }
        Commands::Play { index } => {
            let repo = FileSystemRepository::discover()?;
            PlaySoundService::new(repo).execute(position(index)?)?;
            Ok(())
        }
        Commands::Export { output } => {
            let repo = FileSystemRepository::discover()?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from(default_export_file_name(Local::now().date_naive()))
            });

            let summary = ExportService::new(repo).execute(&output)?;
            println!(
                "Exported {} sound(s) to {}",
                summary.sounds,
                summary.path.display()
            );
            Ok(())
        }
        Commands::Import { bundle } => {
            let repo = FileSystemRepository::discover()?;

            match ImportService::new(repo).execute_selected(&ArgumentSelector::from(bundle))? {
                Some(summary) => println!("{}", format_import_summary(&summary)),
                None => println!("No bundle selected"),
            }
            Ok(())
        }
        Commands::Prune { delete } => {
            let repo = FileSystemRepository::discover()?;
            let orphans = PruneService::new(repo).execute(delete)?;
            println!("{}", format_orphans(&orphans, delete).trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("asset_dir = {}", config.asset_dir.display());
                println!("store_key = {}", config.store_key);
                println!("player = {}", config.get_player());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: soundboard config [--list | <key> [<value>]]");
                println!("Valid keys: asset_dir, store_key, player, created");
                Ok(())
            }
        }
    }
}
