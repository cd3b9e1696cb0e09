use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use trishape::plane::rand::Bounds2i;
use trishape::{Point, Triangle};

mod args;
mod batch;
mod commands;
mod provenance;

use args::parse_point;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Lattice triangle area and shape classification")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Vertices shared by the single-triangle commands.
#[derive(clap::Args)]
struct Vertices {
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    a: Point,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    b: Point,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    c: Point,
}

impl Vertices {
    fn triangle(&self) -> Triangle {
        Triangle::new(self.a, self.b, self.c)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print the shoelace area of a triangle
    Area(Vertices),
    /// Print the Manhattan distance between two points
    Distance {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        q: Point,
    },
    /// Print the shape of a triangle (fails on coincident vertices)
    Classify(Vertices),
    /// Classify every row of a CSV (columns ax,ay,bx,by,cx,cy) and write an annotated CSV
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print replayable random triangles as JSON lines
    Sample {
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = Bounds2i::default().min, allow_hyphen_values = true)]
        min: i32,
        #[arg(long, default_value_t = Bounds2i::default().max, allow_hyphen_values = true)]
        max: i32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Area(v) => println!("{}", commands::area_of(&v.triangle())),
        Action::Distance { p, q } => println!("{}", commands::distance(p, q)),
        Action::Classify(v) => println!("{}", commands::classify_one(&v.triangle())?),
        Action::Batch { input, out } => {
            commands::run_batch(&input, &out)?;
        }
        Action::Sample {
            count,
            seed,
            min,
            max,
        } => {
            for line in commands::sample(count, seed, Bounds2i::new(min, max))? {
                println!("{line}");
            }
        }
        Action::Report => println!("{}", commands::report()?),
    }
    Ok(())
}
