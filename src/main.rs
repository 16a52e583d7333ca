//! Map page fitting tool
//!
//! Reads a route of projected coordinates, covers it with map pages of a
//! given paper size and scale, and writes the pages in route order.
//! Optionally records the fitting process as an animated GIF.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{error, info};

use pagefit::cluster::{Fitter, PageSpec};
use pagefit::io::{load_coordinates, save_pages, write_pages};
use pagefit::render::{DEFAULT_FRAME_DELAY_MS, GifAnimator};
use pagefit::{PageFitError, Result};


#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Paper {
    A3,
    A4,
}

#[derive(Parser, Debug)]
#[command(name = "pagefit")]
#[command(about = "Cover a route with the fewest map pages", long_about = None)]
struct Args {
    /// Route file with one x,y coordinate per line
    #[arg(short, long, default_value = "route.txt")]
    input: PathBuf,

    /// Output file for fitted pages (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write an animated GIF of the fitting process
    #[arg(short, long)]
    animation: Option<PathBuf>,

    /// Paper size
    #[arg(short, long, value_enum, default_value_t = Paper::A3)]
    paper: Paper,

    /// Map scale (map units per paper unit)
    #[arg(short, long, default_value_t = 25000.0)]
    scale: f64,

    /// Refinement passes after each new page
    #[arg(short = 'r', long, default_value_t = 10)]
    iterations: usize,

    /// Seed for choosing new page positions (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Field delimiter for route and output files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Animation width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Animation height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    frame_delay: u32,

    /// Add an animation frame after every refinement pass
    #[arg(long)]
    animate_refinements: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let delimiter = delimiter_byte(args.delimiter)?;
    let template = page_template(args.paper, args.scale)?;

    let coordinates = load_coordinates(&args.input, delimiter)?;
    info!("Read {} coordinates from {:?}", coordinates.len(), args.input);

    let mut animator = match &args.animation {
        Some(path) => Some(
            GifAnimator::create(path, &coordinates, args.width, args.height)?
                .with_frame_delay(args.frame_delay),
        ),
        None => None,
    };

    let mut fitter = Fitter::new(&coordinates, template, args.iterations)?
        .with_refinement_updates(args.animate_refinements);
    if let Some(seed) = args.seed {
        fitter = fitter.with_seed(seed);
    }
    if let Some(animator) = animator.as_mut() {
        fitter = fitter.with_listener(animator);
    }

    let pages = fitter.fit()?;

    if let (Some(path), Some(animator)) = (&args.animation, &animator) {
        info!(
            "Animation with {} frames written to {:?}",
            animator.frames_written(),
            path
        );
    }

    match &args.output {
        None => write_pages(std::io::stdout().lock(), &pages, delimiter)?,
        Some(path) => {
            save_pages(path, &pages, delimiter)?;
            info!("{} pages written to {:?}", pages.len(), path);
        }
    }

    Ok(())
}

fn page_template(paper: Paper, scale: f64) -> Result<PageSpec> {
    match paper {
        Paper::A3 => PageSpec::a3(scale),
        Paper::A4 => PageSpec::a4(scale),
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| PageFitError::InvalidInput {
            param: "delimiter",
            reason: format!("{delimiter:?} is not a single ASCII character"),
        })
}
