use clap::{Parser, Subcommand};
use sf_app::{
    AppError, AppResult, ExportOptions, ExportProgressEvent, ExportRequest, ExportStage,
    comparison_scene, export_animation, frame_series, list_renders, load_render, load_study,
    points_to_csv, save_study, scene_to_csv, static_profile_scene_for, summarize, validate_study,
};
use sf_core::Real;
use sf_results::RenderStore;
use sf_study::StudyConfig;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "ShearFlow CLI - Power-law pipe flow velocity profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a study file
    Validate {
        /// Path to the study YAML file
        config: PathBuf,
    },
    /// Write the default study to a new file
    Init {
        /// Destination path (.yaml or .json)
        path: PathBuf,
    },
    /// Print the velocity profile for one exponent as CSV
    Profile {
        /// Path to the study YAML file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Flow-behavior index (defaults to the study's n_fixed)
        #[arg(long)]
        n: Option<f64>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the normalized comparison curves as CSV
    Compare {
        /// Path to the study YAML file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render every animation frame into the render store
    Animate {
        /// Path to the study YAML file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Render store directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Skip cache and force re-render
        #[arg(long)]
        no_cache: bool,
    },
    /// List stored renders
    Renders {
        /// Render store directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Show details of a stored render
    ShowRender {
        /// Render ID to display
        render_id: String,
        /// Render store directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Export one frame of a stored render as CSV
    ExportSeries {
        /// Render ID
        render_id: String,
        /// Frame index
        frame: usize,
        /// Export v/v0 instead of v
        #[arg(long)]
        normalized: bool,
        /// Render store directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => cmd_validate(&config),
        Commands::Init { path } => cmd_init(&path),
        Commands::Profile { config, n, output } => {
            cmd_profile(config.as_deref(), n, output.as_deref())
        }
        Commands::Compare { config, output } => cmd_compare(config.as_deref(), output.as_deref()),
        Commands::Animate {
            config,
            out_dir,
            no_cache,
        } => cmd_animate(config.as_deref(), out_dir.as_deref(), !no_cache),
        Commands::Renders { out_dir } => cmd_renders(out_dir.as_deref()),
        Commands::ShowRender { render_id, out_dir } => {
            cmd_show_render(&render_id, out_dir.as_deref())
        }
        Commands::ExportSeries {
            render_id,
            frame,
            normalized,
            out_dir,
            output,
        } => cmd_export_series(
            &render_id,
            frame,
            normalized,
            out_dir.as_deref(),
            output.as_deref(),
        ),
    }
}

fn study_or_default(config: Option<&Path>) -> AppResult<StudyConfig> {
    match config {
        Some(path) => load_study(path),
        None => Ok(StudyConfig::default()),
    }
}

/// `--out-dir` wins; otherwise renders live next to the study file, or in the
/// working directory when running on defaults.
fn open_store(out_dir: Option<&Path>, config: Option<&Path>) -> AppResult<RenderStore> {
    let store = match (out_dir, config) {
        (Some(dir), _) => RenderStore::new(dir.to_path_buf())?,
        (None, Some(path)) => RenderStore::for_study(path)?,
        (None, None) => RenderStore::new(PathBuf::from(".shearflow").join("renders"))?,
    };
    Ok(store)
}

fn write_output(csv: &str, output: Option<&Path>, rows: usize) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} data points to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_validate(config: &Path) -> AppResult<()> {
    println!("Validating study: {}", config.display());
    let study = load_study(config)?;
    validate_study(&study)?;

    let summary = summarize(&study);
    println!("✓ Study is valid");
    println!("  Name: {}", summary.name);
    println!(
        "  Pipe: R = {}, beta = {}, mu0 = {}",
        summary.radius, summary.beta, summary.mu0
    );
    println!("  Radial samples: {}", summary.samples);
    println!("  Static exponent: {}", summary.n_fixed);
    println!("  Animation frames: {}", summary.frame_count);
    println!("  Comparison curves: {}", summary.key_count);
    Ok(())
}

fn cmd_init(path: &Path) -> AppResult<()> {
    if path.exists() {
        return Err(AppError::InvalidInput(format!(
            "{} already exists",
            path.display()
        )));
    }
    save_study(path, &StudyConfig::default())?;
    tracing::info!(path = %path.display(), "wrote default study");
    println!("✓ Wrote default study to {}", path.display());
    Ok(())
}

fn cmd_profile(config: Option<&Path>, n: Option<Real>, output: Option<&Path>) -> AppResult<()> {
    let study = study_or_default(config)?;
    let n = n.unwrap_or(study.n_fixed);
    tracing::info!(n, study = %study.name, "profile");
    let scene = static_profile_scene_for(&study, n)?;

    let points = scene
        .series
        .first()
        .map(|s| s.points.as_slice())
        .unwrap_or_default();
    let csv = points_to_csv("r,v", points);
    write_output(&csv, output, points.len())
}

fn cmd_compare(config: Option<&Path>, output: Option<&Path>) -> AppResult<()> {
    let study = study_or_default(config)?;
    let scene = comparison_scene(&study)?;

    let rows = scene.series.iter().map(|s| s.points.len()).sum();
    let csv = scene_to_csv(&scene, "v_norm");
    write_output(&csv, output, rows)
}

fn cmd_animate(config: Option<&Path>, out_dir: Option<&Path>, use_cache: bool) -> AppResult<()> {
    let study = study_or_default(config)?;
    let store = open_store(out_dir, config)?;
    tracing::info!(store = %store.root_dir().display(), use_cache, "animate");
    println!(
        "Rendering {} frames for study: {}",
        study.n_range.count, study.name
    );

    let request = ExportRequest {
        study: &study,
        store: &store,
        options: ExportOptions {
            use_cache,
            ..ExportOptions::default()
        },
    };

    let mut last_emit = Instant::now();
    let mut last_stage = None;
    let response = export_animation(
        &request,
        Some(&mut |event| {
            let emit_now = last_stage != Some(event.stage)
                || event.stage == ExportStage::Completed
                || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                last_stage = Some(event.stage);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.render_id);
    } else {
        println!("✓ Render completed: {}", response.render_id);
    }

    let manifest = &response.manifest;
    println!("  Frames: {}", manifest.frame_count);
    println!(
        "  Playback: {} fps, {}x{} px at {} dpi",
        manifest.fps, manifest.width_px, manifest.height_px, manifest.dpi
    );
    println!("  Store: {}", store.root_dir().display());
    println!("  Total: {:.3}s", response.total_time_s);

    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &ExportProgressEvent) {
    match (event.stage, event.frames) {
        (ExportStage::RenderingFrames, Some((done, total))) => {
            let fraction = event.fraction_complete().unwrap_or(0.0);
            let width = 28usize;
            let filled = ((fraction * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  frame={}/{}  elapsed={:.1}s",
                bar,
                fraction * 100.0,
                done,
                total,
                event.elapsed_wall_s
            );
            let _ = io::stdout().flush();
        }
        _ => {
            let spinner = ['|', '/', '-', '\\'];
            let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
            let mut line = format!(
                "\r{} {}  elapsed={:.2}s",
                spinner[spin_idx],
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            print!("{}", line);
            let _ = io::stdout().flush();
        }
    }
}

fn cmd_renders(out_dir: Option<&Path>) -> AppResult<()> {
    let store = open_store(out_dir, None)?;
    let renders = list_renders(&store)?;

    if renders.is_empty() {
        println!("No stored renders in {}", store.root_dir().display());
    } else {
        println!("Stored renders in {}:", store.root_dir().display());
        for manifest in renders {
            println!(
                "  {} - {} ({} frames, {})",
                manifest.render_id, manifest.study_name, manifest.frame_count, manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_render(render_id: &str, out_dir: Option<&Path>) -> AppResult<()> {
    println!("Loading render: {}", render_id);

    let store = open_store(out_dir, None)?;
    let (manifest, frames) = load_render(&store, render_id)?;

    println!("\nRender Summary:");
    println!("  Study: {}", manifest.study_name);
    println!("  Created: {}", manifest.timestamp);
    println!("  Renderer: {}", manifest.renderer_version);
    println!(
        "  Playback: {} fps, {}x{} px at {} dpi",
        manifest.fps, manifest.width_px, manifest.height_px, manifest.dpi
    );
    println!("  Frames: {}", frames.len());

    if let (Some(first), Some(last)) = (frames.first(), frames.last()) {
        println!("  Exponent range: {} -> {}", first.n, last.n);
        println!("  Radial samples: {}", first.r.len());
    }

    println!("\nFrames:");
    for frame in &frames {
        println!(
            "  {:>4}  {:<10}  y_max={:.6e}",
            frame.index, frame.title, frame.y_max
        );
    }

    Ok(())
}

fn cmd_export_series(
    render_id: &str,
    frame: usize,
    normalized: bool,
    out_dir: Option<&Path>,
    output: Option<&Path>,
) -> AppResult<()> {
    let store = open_store(out_dir, None)?;
    let (_manifest, frames) = load_render(&store, render_id)?;
    let series = frame_series(&frames, frame, normalized)?;
    tracing::info!(render_id, frame, normalized, points = series.len(), "export series");

    let header = if normalized { "r,v_norm" } else { "r,v" };
    let csv = points_to_csv(header, &series);
    write_output(&csv, output, series.len())
}
