//! xlsxaudit - Pure-Rust size auditor for bloated Excel (XLSX) files
//!
//! This crate treats an `.xlsx` file as what it physically is - a ZIP archive
//! of XML parts - and reports which internal parts consume the most space,
//! to help find out why a workbook is bloated. It reads sizes from the ZIP
//! central directory without inflating member bodies, so a scan is cheap even
//! for large files; the only streamed member is `xl/sharedStrings.xml`, which
//! is read in chunks to estimate the number of shared-string entries.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxaudit::AuditorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auditor = AuditorBuilder::new().build()?;
//!     let report = auditor.audit_path("bloated.xlsx")?;
//!
//!     println!("total uncompressed: {} bytes", report.summary.total_uncompressed);
//!     for tip in &report.suggestions {
//!         println!("- {}", tip);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! For in-memory data, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use xlsxaudit::scan;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xlsx_data: Vec<u8> = vec![]; // Your XLSX file bytes
//! let report = scan(Cursor::new(xlsx_data))?;
//! assert_eq!(
//!     report.rows.iter().map(|r| r.uncompressed_bytes).sum::<u64>(),
//!     report.summary.total_uncompressed,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use xlsxaudit::{AuditorBuilder, ReportFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auditor = AuditorBuilder::new()
//!         .with_top_n(10)                         // Show the 10 largest entries
//!         .with_shared_strings_estimate(false)    // Skip the entry-count estimate
//!         .with_report_format(ReportFormat::Json) // Render as JSON
//!         .build()?;
//!
//!     let report = auditor.audit_path("bloated.xlsx")?;
//!     let mut stdout = std::io::stdout();
//!     auditor.render(&report, &mut stdout)?;
//!     Ok(())
//! }
//! ```

mod advisor;
mod api;
mod builder;
mod error;
mod output;
mod scanner;
mod types;

// 公開API
pub use advisor::suggest;
pub use api::ReportFormat;
pub use builder::{Auditor, AuditorBuilder};
pub use error::XlsxAuditError;
pub use output::{
    default_report_paths, human_bytes, write_csv_report, write_text_report, ReportFormatter,
};
pub use scanner::{scan, scan_path};
pub use types::{ArchiveMember, AuditReport, ScanReport, ScanSummary};
