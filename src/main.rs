use anyhow::{bail, Result};
use clap::Parser;
use playlist_import::library::DirectorySource;
use playlist_import::m3u::PlaylistEncoding;
use playlist_import::model::MatchOutcome;
use playlist_import::rhythmbox::RhythmboxSource;
use playlist_import::{ImportConfig, ImportPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-import")]
#[command(about = "Match M3U/M3U8 playlists against a music library", long_about = None)]
struct Args {
    /// Playlist files (.m3u / .m3u8)
    #[arg(required = true)]
    playlists: Vec<PathBuf>,

    /// Path to Rhythmbox database (rhythmdb.xml)
    #[arg(
        short = 'd',
        long,
        default_value = "~/.local/share/rhythmbox/rhythmdb.xml",
        conflicts_with = "library_dir"
    )]
    database: String,

    /// Use the audio files under this directory as the library instead
    #[arg(short = 'l', long)]
    library_dir: Option<String>,

    /// Encodings to try, in order (can be specified multiple times)
    #[arg(long = "encoding")]
    encodings: Vec<PlaylistEncoding>,

    /// Treat file:// lines as plain paths
    #[arg(long)]
    no_file_uris: bool,

    /// Report playlists even when nothing matched
    #[arg(long)]
    keep_empty: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = ImportConfig::new()
        .with_file_uris(!args.no_file_uris)
        .with_keep_empty(args.keep_empty);

    if !args.encodings.is_empty() {
        log::info!("Encoding fallback order: {:?}", args.encodings);
        config = config.with_encodings(args.encodings.clone());
    }

    // Expand ~ in paths
    let pipeline = match args.library_dir {
        Some(ref dir) => {
            let dir = shellexpand::tilde(dir);
            ImportPipeline::new(config, &DirectorySource::new(PathBuf::from(dir.as_ref())))?
        }
        None => {
            let db_path = shellexpand::tilde(&args.database);
            ImportPipeline::new(config, &RhythmboxSource::new(PathBuf::from(db_path.as_ref())))?
        }
    };

    if pipeline.library().is_empty() {
        bail!("Library is empty, nothing to match against");
    }

    log::info!("Library loaded: {} tracks", pipeline.library().record_count());

    let imports = pipeline.import_all(&args.playlists);

    for import in &imports {
        println!(
            "{} ({}): {}/{} matched",
            import.playlist.name,
            import.source.display(),
            import.report.matched_count(),
            import.tracks.len()
        );

        for outcome in import.report.outcomes() {
            if let MatchOutcome::Unmatched { path } = outcome {
                println!("  unmatched: {}", path.display());
            }
        }
    }

    log::info!(
        "Imported {} of {} playlist(s)",
        imports.len(),
        args.playlists.len()
    );

    Ok(())
}
