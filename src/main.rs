//! xlsxaudit CLI
//!
//! Thin command-line wrapper around the library: parses arguments, runs one
//! audit, renders the result to stdout, and writes the CSV/TXT report files.
//! Report targets are independent - a failure writing one of them is reported
//! on stderr and does not affect the other or the exit status.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use xlsxaudit::{
    default_report_paths, write_csv_report, write_text_report, Auditor, AuditorBuilder,
    ReportFormat, XlsxAuditError,
};

#[derive(Parser)]
#[command(
    name = "xlsxaudit",
    about = "Size audit for bloated .xlsx files (inspects the file as a ZIP archive)"
)]
struct Cli {
    /// Path to the .xlsx file
    xlsx_path: PathBuf,

    /// How many of the largest entries to show
    #[arg(long, default_value = "25")]
    top: usize,

    /// Write entry details to this CSV file (default: next to the input, suffix _xlsx_audit.csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the text summary to this TXT file (default: next to the input, suffix _xlsx_audit.txt)
    #[arg(long)]
    txt: Option<PathBuf>,

    /// Console output format: text, json, csv
    #[arg(long, default_value = "text")]
    format: String,

    /// Skip the shared-strings entry count estimate
    #[arg(long)]
    no_shared_strings: bool,

    /// Do not write CSV/TXT report files
    #[arg(long)]
    no_reports: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), XlsxAuditError> {
    let format = parse_format(&cli.format);

    let auditor: Auditor = AuditorBuilder::new()
        .with_top_n(cli.top)
        .with_shared_strings_estimate(!cli.no_shared_strings)
        .with_report_format(format)
        .build()?;

    let report = auditor.audit_path(&cli.xlsx_path)?;

    // Console output
    if format == ReportFormat::Text {
        println!("File: {}", cli.xlsx_path.display());
        println!();
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    auditor.render(&report, &mut handle)?;
    handle.flush()?;
    drop(handle);

    // Report files: each target is handled independently, and a write
    // failure never invalidates the already-computed scan result.
    if !cli.no_reports {
        let (default_csv, default_txt) = default_report_paths(&cli.xlsx_path);
        let csv_path = cli.csv.clone().unwrap_or(default_csv);
        let txt_path = cli.txt.clone().unwrap_or(default_txt);

        match write_csv_report(&csv_path, &report) {
            Ok(()) => println!("\nCSV report written: {}", csv_path.display()),
            Err(e) => eprintln!("Failed to write CSV report: {}", e),
        }
        match write_text_report(&txt_path, &cli.xlsx_path, &report, auditor.top_n()) {
            Ok(()) => println!("TXT report written: {}", txt_path.display()),
            Err(e) => eprintln!("Failed to write TXT report: {}", e),
        }
    }

    Ok(())
}

fn parse_format(s: &str) -> ReportFormat {
    match s {
        "text" => ReportFormat::Text,
        "json" => ReportFormat::Json,
        "csv" => ReportFormat::Csv,
        other => {
            eprintln!("Error: Unknown format: {} (expected text, json, or csv)", other);
            process::exit(1);
        }
    }
}

fn handle_error(error: XlsxAuditError) {
    match error {
        XlsxAuditError::NotFound(path) => {
            eprintln!("File not found: {}", path.display());
            eprintln!("Please check the path and try again.");
        }
        XlsxAuditError::CorruptArchive(msg) => {
            eprintln!("Corrupt archive: {}", msg);
            eprintln!("The file may be corrupted or not a valid .xlsx (ZIP) file.");
        }
        XlsxAuditError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file is readable.");
        }
        XlsxAuditError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check the command-line options.");
        }
    }
}
