//! Integration tests for CLI argument handling
//!
//! Tests flag parsing from the command line. The panel itself needs the
//! network or a populated cache, so only argument handling is driven
//! through the binary here.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dockwatch"))
        .args(args)
        .output()
        .expect("Failed to execute dockwatch")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dockwatch"), "Help should mention dockwatch");
    assert!(stdout.contains("station"), "Help should mention --station flag");
    assert!(stdout.contains("cache"), "Help should mention the cache controls");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(
        output.status.success(),
        "Expected --version to exit successfully"
    );
}

#[test]
fn test_invalid_station_prints_error_and_exits() {
    let output = run_cli(&["--station", "missing-separator"]);
    assert!(
        !output.status.success(),
        "Expected a malformed station spec to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid station") || stderr.contains("LABEL=ID"),
        "Should print error message about the station spec: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use dockwatch::cli::{parse_station_arg, Cli, StartupConfig};
    use dockwatch::data::default_stations;

    #[test]
    fn test_cli_no_args_falls_back_to_default_stations() {
        let cli = Cli::parse_from(["dockwatch"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.stations.stations, default_stations());
    }

    #[test]
    fn test_cli_repeated_station_flags_keep_order() {
        let cli = Cli::parse_from([
            "dockwatch",
            "--station",
            "Home=19",
            "--station",
            "Work=77",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.stations.stations.len(), 2);
        assert_eq!(config.stations.stations[0].label, "Home");
        assert_eq!(config.stations.stations[1].station_id, "77");
    }

    #[test]
    fn test_parse_station_arg_roundtrip() {
        let station = parse_station_arg("ÉTS (Peel/N-D)=77").unwrap();
        assert_eq!(station.label, "ÉTS (Peel/N-D)");
        assert_eq!(station.station_id, "77");
    }

    #[test]
    fn test_debug_and_no_ebikes_flags_combine() {
        let cli = Cli::parse_from(["dockwatch", "--debug", "--no-ebikes"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.wipe_cache);
        assert!(!config.stations.show_ebikes);
    }
}
