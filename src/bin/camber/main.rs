//! Camber CLI - mesh curvature analysis command-line tool.
//!
//! Usage: camber <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `camber --help` for available commands.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use camber::algo::curvature::{mean_curvature, VertexAreaMode};
use camber::algo::flow::flow_step;
use camber::io;

#[derive(Parser)]
#[command(name = "camber")]
#[command(author, version, about = "Mesh curvature CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,

        /// Show curvature statistics
        #[arg(long)]
        curvature: bool,

        /// Area normalization mode for the curvature statistics
        #[arg(short, long, value_enum, default_value = "voronoi")]
        area_mode: AreaMode,
    },

    /// Estimate per-vertex mean curvature
    Curvature {
        /// Input mesh file
        input: PathBuf,

        /// Area normalization mode
        #[arg(short, long, value_enum, default_value = "voronoi")]
        area_mode: AreaMode,

        /// Write a PLY file carrying the magnitudes as per-vertex quality
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Integrate mean-curvature flow
    Flow {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        /// Number of flow steps
        #[arg(short, long, default_value = "1")]
        iterations: usize,

        /// Scale factor applied to each Euler step
        #[arg(short, long, default_value = "0.001")]
        step_factor: f64,

        /// Area normalization mode for the curvature field
        #[arg(short, long, value_enum, default_value = "voronoi")]
        area_mode: AreaMode,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AreaMode {
    /// One third of each incident face's area
    Barycentric,
    /// Mixed Voronoi areas (Meyer et al.)
    Voronoi,
}

impl From<AreaMode> for VertexAreaMode {
    fn from(mode: AreaMode) -> Self {
        match mode {
            AreaMode::Barycentric => VertexAreaMode::Barycentric,
            AreaMode::Voronoi => VertexAreaMode::VoronoiMixed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info {
            input,
            curvature: show_curvature,
            area_mode,
        } => {
            cmd_info(&input, show_curvature, area_mode)?;
        }

        Commands::Curvature {
            input,
            area_mode,
            export,
        } => {
            cmd_curvature(&input, area_mode, export.as_deref())?;
        }

        Commands::Flow {
            input,
            output,
            iterations,
            step_factor,
            area_mode,
        } => {
            cmd_flow(&input, &output, iterations, step_factor, area_mode)?;
        }
    }

    Ok(())
}

/// Draw a carriage-return progress bar on stderr.
fn print_progress(current: usize, total: usize) {
    if total == 0 {
        return;
    }

    // Use rounding instead of truncation for smoother progress
    let percent = if current >= total {
        100
    } else {
        ((current * 100) + (total / 2)) / total
    };

    let bar_width = 30;
    let filled = (percent * bar_width) / 100;
    let empty = bar_width - filled;

    let bar: String = std::iter::repeat('=').take(filled).collect();
    let space: String = std::iter::repeat(' ').take(empty).collect();

    // Use carriage return to overwrite the line
    eprint!("\r[{}{}] {:3}% step {}/{}", bar, space, percent, current, total);

    // Flush to ensure immediate display
    let _ = std::io::stderr().flush();

    // Print newline on completion
    if current >= total {
        eprintln!();
    }
}

fn cmd_info(
    input: &PathBuf,
    show_curvature: bool,
    area_mode: AreaMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());

    // Compute some statistics
    let mut min_area = f64::MAX;
    let mut max_area = 0.0_f64;
    for &area in mesh.face_areas() {
        min_area = min_area.min(area);
        max_area = max_area.max(area);
    }

    println!("Surface area: {:.6}", mesh.surface_area());
    println!("Face area range: [{:.6}, {:.6}]", min_area, max_area);

    // Bounding box
    if let Some((min, max)) = mesh.bounding_box() {
        println!("Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z);
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    println!("Mean edge length: {:.6}", mesh.mean_edge_length());

    // Curvature statistics
    if show_curvature {
        println!("\nCurvature ({} areas):", mode_name(area_mode));

        let field = mean_curvature(&mesh, area_mode.into())?;
        let (min, max, avg) = magnitude_stats(field.magnitudes());
        println!("  Mean: min={:.4}, max={:.4}, avg={:.4}", min, max, avg);
    }

    Ok(())
}

fn mode_name(mode: AreaMode) -> &'static str {
    match mode {
        AreaMode::Barycentric => "barycentric",
        AreaMode::Voronoi => "voronoi",
    }
}

fn magnitude_stats(values: &[f64]) -> (f64, f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg: f64 = values.iter().sum::<f64>() / values.len() as f64;
    (min, max, avg)
}

fn cmd_curvature(
    input: &PathBuf,
    area_mode: AreaMode,
    export: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = io::load(input)?;

    println!("Loaded: {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces());

    println!("Computing mean curvature ({} areas)...", mode_name(area_mode));

    let start = Instant::now();
    let field = mean_curvature(&mesh, area_mode.into())?;
    let elapsed = start.elapsed();

    let (min, max, avg) = magnitude_stats(field.magnitudes());
    println!("Curvature magnitude: min={:.4}, max={:.4}, avg={:.4}", min, max, avg);

    if let Some(areas) = field.voronoi_areas() {
        let total: f64 = areas.iter().sum();
        println!("Mixed area total: {:.6} (surface area: {:.6})", total, mesh.surface_area());
    }

    println!("Computed in {:.2?}", elapsed);

    if let Some(path) = export {
        io::ply::save_with_quality(&mesh, field.magnitudes(), path)?;
        println!("Exported: {}", path.display());
    }

    Ok(())
}

fn cmd_flow(
    input: &PathBuf,
    output: &PathBuf,
    iterations: usize,
    step_factor: f64,
    area_mode: AreaMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = io::load(input)?;

    println!("Loaded: {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces());
    println!(
        "Integrating mean-curvature flow ({} iterations, step factor {}, {} areas)...",
        iterations,
        step_factor,
        mode_name(area_mode)
    );

    let initial_area = mesh.surface_area();

    let start = Instant::now();
    for step in 0..iterations {
        let positions = flow_step(&mesh, mesh.positions(), step_factor, area_mode.into())?;
        mesh.set_positions(positions);
        print_progress(step + 1, iterations);
    }
    let elapsed = start.elapsed();

    println!(
        "Surface area: {:.6} -> {:.6}",
        initial_area,
        mesh.surface_area()
    );

    io::save(&mesh, output)?;
    println!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}
