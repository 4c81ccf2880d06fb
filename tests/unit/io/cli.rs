//! Tests for command-line interface parsing and configuration mapping

#[cfg(test)]
mod tests {
    use clap::Parser;
    use scantex::io::cli::Cli;
    use scantex::io::configuration::{DEFAULT_BAND_WIDTH, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
    use std::path::PathBuf;

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["scantex", "scans"]);

        assert_eq!(cli.target, PathBuf::from("scans"));
        assert_eq!(cli.rows, DEFAULT_GRID_ROWS);
        assert_eq!(cli.cols, DEFAULT_GRID_COLS);
        assert_eq!(cli.band_width, DEFAULT_BAND_WIDTH);
        assert_eq!(cli.set, None);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with every available argument
    // Verified by dropping an argument from the parse
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "scantex",
            "sheet.jpg",
            "--rows",
            "2",
            "--cols",
            "3",
            "--band-width",
            "10",
            "--set",
            "4",
            "--quiet",
        ]);

        assert_eq!(cli.target, PathBuf::from("sheet.jpg"));
        assert_eq!(cli.rows, 2);
        assert_eq!(cli.cols, 3);
        assert_eq!(cli.band_width, 10);
        assert_eq!(cli.set, Some(4));
        assert!(cli.quiet);
    }

    // Tests the progress display toggle
    // Verified by inverting the quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let noisy = Cli::parse_from(["scantex", "scans"]);
        assert!(noisy.should_show_progress());

        let quiet = Cli::parse_from(["scantex", "scans", "--quiet"]);
        assert!(!quiet.should_show_progress());
    }

    // Tests that arguments flow into the pipeline configuration
    // Verified by always building the default configuration
    #[test]
    fn test_pipeline_config_mapping() {
        let cli = Cli::parse_from([
            "scantex",
            "scans",
            "--rows",
            "7",
            "--cols",
            "2",
            "--band-width",
            "5",
        ]);
        let config = cli.pipeline_config();

        assert_eq!(config.grid_rows, 7);
        assert_eq!(config.grid_cols, 2);
        assert_eq!(config.trim.band_width, 5);
        // Untouched trim fields keep the scanner defaults
        assert_eq!(config.trim.right_modulus, DEFAULT_GRID_COLS);
    }
}
