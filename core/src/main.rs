use clap::Parser;
use dicomscan_core::cli::{parse_view_choice, prompt, prompt_yes_no, Cli, View};
use dicomscan_core::{
    discover, export_csv, ConsoleReport, MetadataExtractor, MetadataRecord, Summary,
    DEFAULT_CSV_NAME,
};
use log::{info, warn};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    let files = discover(&cli.directory);
    if files.is_empty() {
        eprintln!(
            "Error: no DICOM files found under {}",
            cli.directory.display()
        );
        process::exit(1);
    }

    let interactive = cli.views.is_empty();
    let detailed = if cli.detailed {
        true
    } else if interactive {
        prompt_yes_no("Extract detailed metadata? (y/n): ")
    } else {
        false
    };

    let extractor = MetadataExtractor::new(detailed);
    let (records, failures) = extractor.extract_all(&files);
    if failures > 0 {
        warn!("{} files could not be processed", failures);
    }

    let views = if interactive {
        println!();
        println!("1. Print to console");
        println!("2. Save to CSV");
        println!("3. Show summary");
        println!("4. All of the above");
        parse_view_choice(&prompt("\nYour choice (1-4): "))
    } else {
        cli.views.clone()
    };

    if views.is_empty() {
        println!("No output selected.");
        return;
    }

    // A fault in one view never aborts the remaining views.
    for view in &views {
        match view {
            View::Console => run_console(&records, &cli, interactive),
            View::Csv => run_csv(&records, &cli, interactive),
            View::Summary => run_summary(&records),
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run_console(records: &[MetadataRecord], cli: &Cli, interactive: bool) {
    if records.is_empty() {
        println!("No metadata records to display.");
        return;
    }

    let limit = cli.limit.or_else(|| {
        if interactive {
            prompt("How many files to display? (Enter for all): ")
                .parse()
                .ok()
        } else {
            None
        }
    });

    print!("{}", ConsoleReport::new(records, limit));
}

fn run_csv(records: &[MetadataRecord], cli: &Cli, interactive: bool) {
    let path = cli.output.clone().unwrap_or_else(|| {
        if interactive {
            let answer = prompt(&format!("CSV file name (default: {}): ", DEFAULT_CSV_NAME));
            if answer.is_empty() {
                PathBuf::from(DEFAULT_CSV_NAME)
            } else {
                PathBuf::from(answer)
            }
        } else {
            PathBuf::from(DEFAULT_CSV_NAME)
        }
    });

    match export_csv(records, &path) {
        Ok(()) => {
            info!("CSV export complete");
            println!("Metadata saved to {}", path.display());
        }
        Err(e) => println!("CSV export failed: {}", e),
    }
}

fn run_summary(records: &[MetadataRecord]) {
    if records.is_empty() {
        println!("No metadata records to summarize.");
        return;
    }

    print!("{}", Summary::from_records(records));
}
