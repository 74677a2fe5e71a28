use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use plotlift_extract::kind::{extract, ChartKind};
use plotlift_scene::metadata::ChartMetadata;
use plotlift_scene::scene::TraceScene;

/// Reconstruct chart data series from vector-graphics traces
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the data series of a single chart instance
    Extract {
        /// Chart family: bar, line, scatter, or pie
        #[arg(long)]
        kind: ChartKind,

        /// Path to the chart metadata JSON
        #[arg(long)]
        meta: PathBuf,

        /// Path to the scene trace JSON
        #[arg(long)]
        scene: PathBuf,

        /// Output path for the JSON-lines records (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Extract every metadata/scene pair found in a directory
    Batch {
        /// Chart family: bar, line, scatter, or pie
        #[arg(long)]
        kind: ChartKind,

        /// Directory of chart metadata JSON files
        #[arg(long)]
        meta_dir: PathBuf,

        /// Directory of scene trace JSON files, named like the metadata
        #[arg(long)]
        scene_dir: PathBuf,

        /// Directory the .jsonl record files are written into
        #[arg(long)]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            kind,
            meta,
            scene,
            out,
        } => run_extract(kind, &meta, &scene, out.as_deref()),
        Commands::Batch {
            kind,
            meta_dir,
            scene_dir,
            out_dir,
        } => run_batch(kind, &meta_dir, &scene_dir, &out_dir),
    }
}

/// Loads one metadata/scene pair and renders its records as JSON lines.
fn process_pair(
    kind: ChartKind,
    meta_path: &Path,
    scene_path: &Path,
) -> Result<String, Box<dyn std::error::Error>> {
    let metadata = ChartMetadata::from_json_file(meta_path)?;
    let scene = TraceScene::from_json_file(scene_path)?;
    let series = extract(kind, &metadata, &scene)?;
    Ok(series.to_json_lines()?)
}

fn run_extract(kind: ChartKind, meta: &Path, scene: &Path, out: Option<&Path>) -> ExitCode {
    match process_pair(kind, meta, scene) {
        Ok(lines) => {
            if let Some(path) = out {
                if let Err(err) = fs::write(path, &lines) {
                    error!("{}: {err}", path.display());
                    return ExitCode::FAILURE;
                }
            } else {
                print!("{lines}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}: {err}", meta.display());
            ExitCode::FAILURE
        }
    }
}

fn run_batch(kind: ChartKind, meta_dir: &Path, scene_dir: &Path, out_dir: &Path) -> ExitCode {
    let mut meta_paths = match list_json_files(meta_dir) {
        Ok(paths) => paths,
        Err(err) => {
            error!("{}: {err}", meta_dir.display());
            return ExitCode::FAILURE;
        }
    };
    meta_paths.sort();

    if let Err(err) = fs::create_dir_all(out_dir) {
        error!("{}: {err}", out_dir.display());
        return ExitCode::FAILURE;
    }

    let mut extracted = 0usize;
    let mut failed = 0usize;
    for meta_path in &meta_paths {
        let stem = match meta_path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        let scene_path = scene_dir.join(format!("{stem}.json"));
        let out_path = out_dir.join(format!("{stem}.jsonl"));

        // One bad chart file never aborts the rest of the batch.
        match process_pair(kind, meta_path, &scene_path) {
            Ok(lines) => match fs::write(&out_path, &lines) {
                Ok(()) => {
                    info!("wrote {}", out_path.display());
                    extracted += 1;
                }
                Err(err) => {
                    error!("{}: {err}", out_path.display());
                    failed += 1;
                }
            },
            Err(err) => {
                error!("{}: {err}", meta_path.display());
                failed += 1;
            }
        }
    }

    info!("{kind} batch done: {extracted} extracted, {failed} failed");
    if extracted == 0 && failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn list_json_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map(|ext| ext == "json").unwrap_or(false) {
            paths.push(path);
        }
    }
    Ok(paths)
}
