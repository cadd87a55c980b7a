//! shapegen - procedural boards and icosphere rings
//!
//! # Commands
//!
//! - `shapegen board` - Write a Parchís board as SVG or DXF
//! - `shapegen ring` - Write a ring of icospheres as STL
//! - `shapegen config` - Print the default configuration file
//!
//! # Usage
//!
//! ```bash
//! # Six players, laser-cut output
//! shapegen board --n-players 6 --use-laser true -o board.svg
//!
//! # Same board for a CAD tool
//! shapegen board --n-players 6 --format dxf -o board.dxf
//!
//! # Twelve icospheres on a ring of radius 8
//! shapegen ring --count 12 --radius 8 -o ring.stl
//! ```
//!
//! Every subcommand accepts `--config shapegen.toml`; flags given on the command
//! line override the file.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shapegen::board::{BoardOptions, generate_board};
use shapegen::config::Config;
use shapegen::host::{DocumentHost, MeshScene};
use shapegen::io::dxf::to_dxf;
use shapegen::io::svg::SvgDocument;
use shapegen::ring::{RingOptions, place_icospheres};
use shapegen::style::Paint;
use shapegen::units::Units;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shapegen")]
#[command(about = "Procedural Parchís boards and icosphere rings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a Parchís board
    Board(BoardArgs),

    /// Write a ring of icospheres
    Ring(RingArgs),

    /// Print the default configuration as TOML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoardFormat {
    Svg,
    Dxf,
}

#[derive(Args)]
struct BoardArgs {
    /// Configuration file with a [board] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "board.svg")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = BoardFormat::Svg)]
    format: BoardFormat,

    /// px, mm, cm, in, pt or pc
    #[arg(long)]
    units: Option<Units>,

    #[arg(long)]
    board_size: Option<f64>,

    #[arg(long)]
    board_margin: Option<f64>,

    #[arg(long)]
    stroke_width: Option<f64>,

    #[arg(long)]
    n_players: Option<usize>,

    #[arg(long)]
    n_columns: Option<usize>,

    #[arg(long)]
    n_boxes_per_column: Option<usize>,

    #[arg(long)]
    generate_center: Option<bool>,

    #[arg(long)]
    generate_numbers: Option<bool>,

    /// `#RRGGBB`, a colour keyword or a packed RGBA integer
    #[arg(long, allow_hyphen_values = true)]
    fill_color: Option<Paint>,

    #[arg(long)]
    use_laser: Option<bool>,
}

impl BoardArgs {
    #[allow(clippy::unnecessary_cast)]
    fn apply(&self, options: &mut BoardOptions) {
        if let Some(units) = self.units {
            options.units = units;
        }
        if let Some(size) = self.board_size {
            options.board_size = size as _;
        }
        if let Some(margin) = self.board_margin {
            options.board_margin = margin as _;
        }
        if let Some(width) = self.stroke_width {
            options.stroke_width = width as _;
        }
        if let Some(n) = self.n_players {
            options.n_players = n;
        }
        if let Some(n) = self.n_columns {
            options.n_columns = n;
        }
        if let Some(n) = self.n_boxes_per_column {
            options.n_boxes_per_column = n;
        }
        if let Some(flag) = self.generate_center {
            options.generate_center = flag;
        }
        if let Some(flag) = self.generate_numbers {
            options.generate_numbers = flag;
        }
        if let Some(color) = self.fill_color {
            options.fill_color = color;
        }
        if let Some(flag) = self.use_laser {
            options.use_laser = flag;
        }
    }
}

#[derive(Args)]
struct RingArgs {
    /// Configuration file with a [ring] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "ring.stl")]
    output: PathBuf,

    /// Number of icospheres
    #[arg(long)]
    count: Option<usize>,

    /// Radius of the ring
    #[arg(long)]
    radius: Option<f64>,

    /// Radius of each icosphere
    #[arg(long)]
    sphere_radius: Option<f64>,

    /// Ico-sphere level, 1 being a bare icosahedron
    #[arg(long)]
    subdivisions: Option<usize>,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,
}

impl RingArgs {
    #[allow(clippy::unnecessary_cast)]
    fn apply(&self, options: &mut RingOptions) {
        if let Some(count) = self.count {
            options.count = count;
        }
        if let Some(radius) = self.radius {
            options.radius = radius as _;
        }
        if let Some(radius) = self.sphere_radius {
            options.sphere_radius = radius as _;
        }
        if let Some(level) = self.subdivisions {
            options.subdivisions = level;
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("Failed to read config {}", path.display()))
        },
        None => Ok(Config::default()),
    }
}

fn board(args: BoardArgs) -> Result<()> {
    let mut options = load_config(args.config.as_ref())?.board;
    args.apply(&mut options);

    let board = generate_board(&options).context("Invalid board options")?;
    match args.format {
        BoardFormat::Svg => {
            let mut document = SvgDocument::for_board(&options);
            let Ok(()) = document.add_group(&board);
            document
                .save(&args.output)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
        },
        BoardFormat::Dxf => {
            let bytes = to_dxf(&board, options.board_size_user_units())?;
            std::fs::write(&args.output, bytes)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
        },
    }

    log::info!("wrote {} shapes to {}", board.shape_count(), args.output.display());
    Ok(())
}

fn ring(args: RingArgs) -> Result<()> {
    let mut options = load_config(args.config.as_ref())?.ring;
    args.apply(&mut options);

    let mut scene = MeshScene::new();
    let created = place_icospheres(&mut scene, &options).context("Invalid ring options")?;

    let bytes = if args.ascii {
        scene.to_stl_ascii("ring").into_bytes()
    } else {
        scene.to_stl_binary("ring")?
    };
    std::fs::write(&args.output, bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("wrote {created} icospheres to {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Board(args) => board(args),
        Commands::Ring(args) => ring(args),
        Commands::Config => {
            print!("{}", Config::default().to_toml_string()?);
            Ok(())
        },
    }
}
