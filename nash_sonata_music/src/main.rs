// Nash Sonata generator — CLI entry point.
//
// Solves and renders the bundled games, writing one MIDI file per game.
// The pipeline per game: sweep the payoff matrix (rendering every cell and
// collecting equilibria) → replay equilibria → encode MIDI → write.
//
// Usage:
//   cargo run -p nash_sonata_music -- [OUTPUT_DIR] [--game NAME] [--config PATH]
//     [--tempo BPM] [--solve-only]
//
// Games: prisoners, chicken, rps (default: all three)
//
// The per-cell trace is logged at `info`; set RUST_LOG=warn to silence it.

use nash_sonata_music::config::RenderConfig;
use nash_sonata_music::games::BundledGame;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_flag::<String>(&args, "--config") {
        Some(path) => RenderConfig::load(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("Failed to load config {path}: {e}");
            std::process::exit(1);
        }),
        None => RenderConfig::default(),
    };
    if let Some(dir) = args.get(1).filter(|s| !s.starts_with("--")) {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(tempo) = parse_flag(&args, "--tempo") {
        config.tempo_bpm = tempo;
    }
    let solve_only = args.iter().any(|a| a == "--solve-only");

    let games: Vec<BundledGame> = match parse_flag::<String>(&args, "--game") {
        Some(name) => match name.parse() {
            Ok(game) => vec![game],
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => BundledGame::ALL.to_vec(),
    };

    println!("=== Nash Sonata ===");
    if solve_only {
        println!("Mode: solve only (no MIDI output)");
    } else {
        println!("Output: {}", config.output_dir.display());
        println!("Tempo: {} BPM, {} ticks per beat", config.tempo_bpm, config.ticks_per_beat);
        if let Err(e) = std::fs::create_dir_all(&config.output_dir) {
            eprintln!("Cannot create {}: {e}", config.output_dir.display());
            std::process::exit(1);
        }
    }
    println!();

    for (i, game) in games.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, games.len(), game.title());
        println!("-----------------");

        let report = match game.perform(solve_only) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("  Error in {}: {e}", game.title());
                std::process::exit(1);
            }
        };

        if report.equilibria.is_empty() {
            println!("  No pure-strategy equilibrium.");
        }
        for (player1, player2) in &report.equilibria {
            println!("  Equilibrium: player 1 {player1}, player 2 {player2}");
        }

        if !solve_only {
            match report.write_midi(&config) {
                Ok(path) => println!(
                    "  Wrote {} ({} notes, {} renderer calls)",
                    path.display(),
                    report.events.len(),
                    report.invocations.sweep + report.invocations.replay
                ),
                Err(e) => {
                    eprintln!("  Error writing MIDI: {e}");
                    std::process::exit(1);
                }
            }
        }
        println!();
    }

    if !solve_only {
        println!("Play with: timidity <file> (or any MIDI player)");
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
