// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, Subcommand};
use log::error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use cube_scan::color::{paint, standard_palette};
use cube_scan::cube::parse_moves;
use cube_scan::{solved_cube, Color, FaceGrid, Faces, ScanConfig, ScanReport, Scanner};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the report as JSON (error diagnostics are always JSON)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a scan stored as JSON: one 3×3 grid of {r, g, b} per face
    Scan {
        /// Path to the colors file
        colors: PathBuf,
    },
    /// Paint a scrambled cube with reference colors and check it
    Demo {
        /// Moves in Singmaster notation, e.g. "R U R' U'"
        #[arg(long, default_value = "")]
        scramble: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ScanConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => ScanConfig::default(),
    };

    let colors = match read_colors(&args.command) {
        Ok(colors) => colors,
        Err(message) => {
            error!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let scanner = Scanner::new(config);
    match scanner.scan_and_check(&colors) {
        Ok(report) => {
            print_report(&report, args.json);
            if report.is_solvable() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(err) => {
            error!("{} ({})", err, err.kind());
            match serde_json::to_string_pretty(&err) {
                Ok(json) => println!("{}", json),
                Err(json_err) => error!("could not serialize diagnostics: {}", json_err),
            }
            ExitCode::FAILURE
        }
    }
}

fn read_colors(command: &Command) -> Result<Faces<FaceGrid<Color>>, String> {
    match command {
        Command::Scan { colors } => {
            let text = fs::read_to_string(colors)
                .map_err(|err| format!("{}: {}", colors.display(), err))?;
            serde_json::from_str(&text).map_err(|err| format!("{}: {}", colors.display(), err))
        }
        Command::Demo { scramble } => {
            let moves = parse_moves(scramble).map_err(|err| err.to_string())?;
            let cube = solved_cube().apply_moves(&moves);
            Ok(paint(&cube, &standard_palette()))
        }
    }
}

fn print_report(report: &ScanReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{}", text),
            Err(err) => error!("could not serialize report: {}", err),
        }
        return;
    }
    println!(
        "orientation found after {} combinations",
        report.scan.combinations_tried
    );
    for (face, rotation) in report.scan.rotations.iter() {
        println!("  {:<5} rotated {}°", face, rotation.degrees());
    }
    println!("{}", report.verdict);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_json_flag_help_describes_error_output() {
        let command = Args::command();
        let json = command
            .get_arguments()
            .find(|arg| arg.get_id() == "json")
            .unwrap();
        let help = json.get_help().map(|help| help.to_string()).unwrap_or_default();
        assert_eq!(help, "Print the report as JSON (error diagnostics are always JSON)");
    }

    #[test]
    fn test_parse_demo_with_global_flags() {
        let args = Args::try_parse_from(["cubecheck", "demo", "--scramble", "R U", "--json"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Command::Demo { ref scramble } if scramble == "R U"));
    }
}
