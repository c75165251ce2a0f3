mod cli;

use tagprobe::{
    config::{self, Config},
    connectivity,
    lyrics::{self, ExtractOutcome, ImportOutcome, ImportSession, Sidecar, SourceRegistry},
    present, Error, MediaRecord,
};
use tagprobe_av::{FfmpegCli, MediaBackend};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() -> Result<()> {
    // Usage errors exit with 1; --help and --version with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tagprobe=debug,tagprobe_av=debug".to_string()
        } else {
            "warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;
    let backend = FfmpegCli::from_config(
        config.tools.ffprobe_path.as_deref(),
        config.tools.ffmpeg_path.as_deref(),
    );

    match cli.command {
        Commands::Info { file, json } => show_info(&backend, &file, json.as_deref()),
        Commands::Lyrics {
            file,
            import,
            choice,
            output_dir,
        } => {
            let mut sidecar = Sidecar::from(&config.output);
            if let Some(dir) = output_dir {
                sidecar.dir = dir;
            }
            if import {
                import_lyrics(&config, &backend, &file, &sidecar, choice)
            } else {
                extract_lyrics(&backend, &file, &sidecar)
            }
        }
        Commands::CheckTools => check_tools(&config, &backend),
    }
}

fn require_file(file: &Path) -> Result<()> {
    if !file.is_file() {
        return Err(Error::FileNotFound {
            path: file.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

fn show_info(backend: &dyn MediaBackend, file: &Path, json: Option<&Path>) -> Result<()> {
    require_file(file)?;

    tracing::info!("Probing {:?}", file);
    let probe = backend.probe(file).map_err(Error::from_probe)?;
    let record = MediaRecord::from_probe(file, &probe);

    print!("{}", present::render_record(&record));

    if let Some(path) = json {
        match present::save_json(&record, path) {
            Ok(()) => println!("\nData saved to file: {}", path.display()),
            Err(e) => {
                tracing::warn!("JSON export failed: {}", e);
                eprintln!("{}", e);
            }
        }
    }

    Ok(())
}

fn extract_lyrics(backend: &dyn MediaBackend, file: &Path, sidecar: &Sidecar) -> Result<()> {
    require_file(file)?;

    match lyrics::extract(backend, file, sidecar)? {
        ExtractOutcome::NoLyrics => println!("No lyrics found in file."),
        ExtractOutcome::Found { sidecar } => report_sidecar(sidecar),
    }

    Ok(())
}

fn import_lyrics(
    config: &Config,
    backend: &dyn MediaBackend,
    file: &Path,
    sidecar: &Sidecar,
    choice: Option<String>,
) -> Result<()> {
    require_file(file)?;

    if config.lyrics.check_connectivity {
        connectivity::check(
            &config.lyrics.connectivity_host,
            Duration::from_secs(config.lyrics.timeout_secs),
        )?;
    }

    let sources = SourceRegistry::from_config(&config.lyrics)?;
    if sources.is_empty() {
        return Err(Error::Argument("No lyrics sources configured (lyrics.sources)".to_string()).into());
    }
    tracing::debug!("Lyrics sources: {:?}", sources.names());

    let session = ImportSession::new(backend, &sources, sidecar)
        .preview_width(config.lyrics.preview_width);

    let from_flag = choice.is_some();
    let outcome = {
        let mut out = io::stdout().lock();
        match choice {
            Some(choice) => session.run(file, &mut Cursor::new(choice), &mut out)?,
            None => session.run(file, &mut io::stdin().lock(), &mut out)?,
        }
    };
    // A --choice selection is never echoed, so end the prompt line here.
    if from_flag && !matches!(outcome, ImportOutcome::NoCandidates { .. }) {
        println!();
    }

    match outcome {
        ImportOutcome::NoCandidates { query } => {
            tracing::debug!("No candidates for {:?}", query);
            println!("No lyrics found online.");
        }
        ImportOutcome::InvalidSelection { input } => {
            tracing::debug!("Selection {:?} is not a listed number", input);
            anyhow::bail!("Invalid choice.");
        }
        ImportOutcome::Embedded { candidate, sidecar } => {
            println!("Embedded lyrics from {} into {}", candidate.label(), file.display());
            report_sidecar(sidecar);
        }
    }

    Ok(())
}

/// Sidecar write failures are reported but do not fail the command.
fn report_sidecar(result: tagprobe::Result<PathBuf>) {
    match result {
        Ok(path) => println!("Lyrics saved to {}", path.display()),
        Err(e) => {
            tracing::warn!("Sidecar write failed: {}", e);
            eprintln!("{}", e);
        }
    }
}

fn check_tools(config: &Config, backend: &FfmpegCli) -> Result<()> {
    println!("Checking external tools...\n");

    let mut all_ok = true;
    for tool in backend.check_tools() {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    let host = &config.lyrics.connectivity_host;
    match connectivity::check(host, Duration::from_secs(config.lyrics.timeout_secs)) {
        Ok(()) => println!("✓ internet ({})", host),
        Err(e) => println!("✗ internet: {}", e),
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install ffmpeg (which provides ffprobe) to use tagprobe.");
    }

    Ok(())
}
