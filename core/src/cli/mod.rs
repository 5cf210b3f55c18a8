use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command-line arguments for dicomscan
///
/// With no `--views` the run is interactive: the field-set choice, the view
/// menu, the console limit and the CSV filename are asked on stdin. Passing
/// `--views` answers the menu up front and suppresses every prompt, so the
/// tool can run unattended.
#[derive(Parser, Debug)]
#[command(name = "dicomscan")]
#[command(about = "Scan a directory tree for DICOM files and tabulate their header metadata")]
#[command(version)]
pub struct Cli {
    /// Root directory to scan
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Extract the detailed field set in addition to the basic one
    #[arg(short, long)]
    pub detailed: bool,

    /// Views to produce, comma-separated; suppresses all prompts
    #[arg(long, value_enum, value_delimiter = ',')]
    pub views: Vec<View>,

    /// Show at most this many records in the console listing
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// CSV output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// The three output views
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Per-record console listing
    Console,
    /// CSV export
    Csv,
    /// Aggregate summary
    Summary,
}

/// Reads one trimmed line from stdin after printing `message`
pub fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Yes/no prompt; anything other than `y`/`yes` counts as no
pub fn prompt_yes_no(message: &str) -> bool {
    matches!(prompt(message).to_lowercase().as_str(), "y" | "yes")
}

/// Parses the view-menu answer into the selected views
///
/// Accepts one or more of `1` (console), `2` (CSV), `3` (summary) and `4`
/// (all three), separated by commas or spaces. Duplicates collapse, order of
/// first mention is kept, and any unrecognized token voids the selection.
pub fn parse_view_choice(input: &str) -> Vec<View> {
    let mut views = Vec::new();
    for token in input.split([',', ' ']).filter(|token| !token.is_empty()) {
        let selected: &[View] = match token {
            "1" => &[View::Console],
            "2" => &[View::Csv],
            "3" => &[View::Summary],
            "4" => &[View::Console, View::Csv, View::Summary],
            _ => return Vec::new(),
        };
        for view in selected {
            if !views.contains(view) {
                views.push(*view);
            }
        }
    }
    views
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_choices() {
        assert_eq!(parse_view_choice("1"), vec![View::Console]);
        assert_eq!(parse_view_choice("2"), vec![View::Csv]);
        assert_eq!(parse_view_choice("3"), vec![View::Summary]);
    }

    #[test]
    fn test_parse_all_choice() {
        assert_eq!(
            parse_view_choice("4"),
            vec![View::Console, View::Csv, View::Summary]
        );
    }

    #[test]
    fn test_parse_combinations() {
        assert_eq!(parse_view_choice("1,3"), vec![View::Console, View::Summary]);
        assert_eq!(parse_view_choice("3 1"), vec![View::Summary, View::Console]);
        // duplicates collapse
        assert_eq!(parse_view_choice("2,2,4"), vec![View::Csv, View::Console, View::Summary]);
    }

    #[test]
    fn test_parse_invalid_input() {
        assert!(parse_view_choice("").is_empty());
        assert!(parse_view_choice("5").is_empty());
        assert!(parse_view_choice("1,x").is_empty());
        assert!(parse_view_choice("all").is_empty());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "dicomscan",
            "/data",
            "--detailed",
            "--views",
            "csv,summary",
            "--output",
            "out.csv",
        ])
        .unwrap();

        assert_eq!(cli.directory, PathBuf::from("/data"));
        assert!(cli.detailed);
        assert_eq!(cli.views, vec![View::Csv, View::Summary]);
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.limit, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_requires_directory() {
        assert!(Cli::try_parse_from(["dicomscan"]).is_err());
    }
}
