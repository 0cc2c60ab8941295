//! Closest Pair Quest CLI
//!
//! Race brute force against divide & conquer from the command line.
//!
//! Usage:
//!     closest-pair-quest generate --count 50
//!     closest-pair-quest race --count 200 --html results.html
//!     closest-pair-quest bench --sizes 100,500,1000,5000

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use closest_pair_quest::adapters::generate::PointGenerator;
use closest_pair_quest::adapters::html::HtmlRender;
use closest_pair_quest::adapters::json::{self, JsonRender};
use closest_pair_quest::adapters::race::Race;
use closest_pair_quest::core::{AlgorithmReport, CanvasConfig, Point, RaceReport};
use closest_pair_quest::ports::{Render, Scene};

/// Closest Pair Quest - brute force vs divide & conquer
#[derive(Parser)]
#[command(name = "closest-pair-quest")]
#[command(version)]
#[command(about = "Closest pair of points: O(n^2) vs O(n log n), timed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random points and print them as JSON
    Generate {
        /// Number of points
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run both algorithms on a point set and compare
    Race {
        /// Number of points to generate
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Read points from a JSON file ([[x, y], ...]) instead of generating
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the JSON response instead of the results box
        #[arg(long)]
        json: bool,

        /// Write an HTML visualization to this path
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Time both algorithms across input sizes
    Bench {
        /// Comma-separated input sizes
        #[arg(long, default_value = "100,500,1000,2000,5000")]
        sizes: String,

        /// Runs per size (times are averaged)
        #[arg(short, long, default_value = "5")]
        repeat: usize,

        /// Seed for reproducible inputs
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn generator(seed: Option<u64>) -> PointGenerator {
    let canvas = CanvasConfig::default();
    match seed {
        Some(seed) => PointGenerator::seeded(seed, canvas),
        None => PointGenerator::new(canvas),
    }
}

fn load_points(input: Option<&PathBuf>, count: usize, seed: Option<u64>) -> Vec<Point> {
    match input {
        Some(path) => {
            let payload = match std::fs::read_to_string(path) {
                Ok(payload) => payload,
                Err(e) => {
                    eprintln!("Error reading {:?}: {}", path, e);
                    process::exit(1);
                }
            };
            match json::parse_points(&payload) {
                Ok(points) => points,
                Err(e) => {
                    eprintln!("Error parsing {:?}: {}", path, e);
                    eprintln!("Expected a JSON array of [x, y] pairs.");
                    process::exit(1);
                }
            }
        }
        None => generator(seed).scatter(count),
    }
}

fn cmd_generate(count: usize, seed: Option<u64>) {
    let points = generator(seed).scatter(count);
    match json::points_payload(&points) {
        Ok(payload) => println!("{}", payload),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Inner width of the CLI result boxes, excluding borders and their margins
const BOX_INNER: usize = 64;

fn box_border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(BOX_INNER + 2), right)
}

fn box_row(content: &str) -> String {
    format!("║ {:<width$} ║", content, width = BOX_INNER)
}

fn box_title(title: &str) -> String {
    format!("║ {:^width$} ║", title, width = BOX_INNER)
}

fn algorithm_rows(label: &str, report: &AlgorithmReport) -> Vec<String> {
    vec![
        box_row(&format!(" {}", label)),
        box_row(&format!("   Time:     {:.4} ms", report.elapsed_ms)),
        box_row(&format!("   Distance: {:.4}", report.distance)),
        box_row(&format!(
            "   Pair:     ({:.2}, {:.2}) - ({:.2}, {:.2})",
            report.pair[0].x, report.pair[0].y, report.pair[1].x, report.pair[1].y
        )),
    ]
}

fn results_box(points: &[Point], report: &RaceReport) -> Vec<String> {
    let mut lines = vec![
        box_border('╔', '╗'),
        box_title("CLOSEST PAIR QUEST - RESULTS"),
        box_border('╠', '╣'),
        box_row(&format!(" Points: {}", points.len())),
        box_border('╠', '╣'),
    ];
    lines.extend(algorithm_rows("Brute Force", &report.brute_force));
    lines.extend(algorithm_rows("Divide & Conquer", &report.divide_and_conquer));
    lines.push(box_border('╚', '╝'));
    lines
}

fn print_results_box(points: &[Point], report: &RaceReport) {
    for line in results_box(points, report) {
        println!("{}", line);
    }

    match report.speedup() {
        Some(speedup) => println!("\nSpeedup: {:.2}x faster with divide & conquer", speedup),
        None => println!("\nSpeedup: too fast to compare at this size"),
    }
}

fn cmd_race(
    count: usize,
    input: Option<PathBuf>,
    seed: Option<u64>,
    as_json: bool,
    html: Option<PathBuf>,
) {
    let points = load_points(input.as_ref(), count, seed);

    let report = match Race::new().run(&points) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let scene = Scene::new(points, report);

    if as_json {
        match JsonRender.render(&scene) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_results_box(&scene.points, &scene.report);
    }

    if let Some(path) = html {
        let page = match HtmlRender::default().render(&scene) {
            Ok(page) => page,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&path, page) {
            eprintln!("Error writing {:?}: {}", path, e);
            process::exit(1);
        }
        println!("Visualization written to {:?}", path);
    }
}

fn cmd_bench(sizes: &str, repeat: usize, seed: u64) {
    let sizes: Vec<usize> = match sizes
        .split(',')
        .map(|s| s.trim().parse())
        .collect::<Result<_, _>>()
    {
        Ok(sizes) => sizes,
        Err(e) => {
            eprintln!("Error parsing --sizes: {}", e);
            process::exit(1);
        }
    };
    let repeat = repeat.max(1);

    println!("{}", box_border('╔', '╗'));
    println!("{}", box_title("CLOSEST PAIR QUEST - BENCHMARK"));
    println!("{}", box_border('╠', '╣'));
    println!(
        "{}",
        box_row(&format!(
            "{:>8}  {:>16}  {:>16}  {:>10}",
            "n", "brute (ms)", "d&c (ms)", "speedup"
        ))
    );
    println!("{}", box_border('╠', '╣'));

    for (i, &n) in sizes.iter().enumerate() {
        // Fresh deterministic scatter per size.
        let points = PointGenerator::seeded(seed.wrapping_add(i as u64), CanvasConfig::default())
            .scatter(n);

        let mut bf_total = 0.0;
        let mut dnc_total = 0.0;
        for _ in 0..repeat {
            let report = match Race::new().run(&points) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Error at n = {}: {}", n, e);
                    process::exit(1);
                }
            };

            // The two algorithms must agree on every run; a gap here is a
            // solver bug, not a benchmark artifact.
            if report.distance_gap() > 1e-9 {
                eprintln!(
                    "Error at n = {}: solvers disagree ({} vs {})",
                    n, report.brute_force.distance, report.divide_and_conquer.distance
                );
                process::exit(1);
            }

            bf_total += report.brute_force.elapsed_ms;
            dnc_total += report.divide_and_conquer.elapsed_ms;
        }

        let bf_avg = bf_total / repeat as f64;
        let dnc_avg = dnc_total / repeat as f64;
        let speedup = if dnc_avg > 0.0 {
            format!("{:.2}x", bf_avg / dnc_avg)
        } else {
            "-".to_string()
        };
        println!(
            "{}",
            box_row(&format!(
                "{:>8}  {:>16.4}  {:>16.4}  {:>10}",
                n, bf_avg, dnc_avg, speedup
            ))
        );
    }

    println!("{}", box_border('╚', '╝'));
}


fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { count, seed } => {
            cmd_generate(count, seed);
        }
        Commands::Race {
            count,
            input,
            seed,
            json,
            html,
        } => {
            cmd_race(count, input, seed, json, html);
        }
        Commands::Bench {
            sizes,
            repeat,
            seed,
        } => {
            cmd_bench(&sizes, repeat, seed);
        }
    }
}
