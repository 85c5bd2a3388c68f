// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// page2pdf command-line entry point.
//
// Exit codes: 0 when every page was converted, 1 when a page failed or nothing
// could be written, 2 for usage errors.

mod args;
mod batch;

use std::process::ExitCode;

use page2pdf_core::error::{Page2PdfError, Result};
use page2pdf_document::{ConversionReport, PageToPdfConverter};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

const EXIT_SUCCESS: u8 = 0;
const EXIT_PAGE_FAILURES: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    info!("page2pdf starting");

    let code = match run(&cli) {
        Ok(report) => summarize(&report),
        Err(err) => {
            error!(error = %err, "Conversion failed");
            eprintln!("page2pdf: {err}");
            exit_code_for(&err)
        }
    };
    ExitCode::from(code)
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ConversionReport> {
    let config = cli.conversion_config()?;
    let set = batch::collect_sources(&cli.xml, &cli.image)?;
    if set.sources.is_empty() {
        return Err(Page2PdfError::NoPages {
            failed: set.unpaired.len(),
        });
    }

    let converter = PageToPdfConverter::new(config)?;
    info!(font = converter.font().name(), "Text layer font ready");
    let mut report = converter.convert(&set.sources, &cli.pdf)?;
    report.failures.extend(set.unpaired);
    Ok(report)
}

fn summarize(report: &ConversionReport) -> u8 {
    for failure in &report.failures {
        warn!(
            layout = %failure.layout.display(),
            error = %failure.error,
            "Page not converted"
        );
    }
    info!(
        written = report.pages_written,
        failed = report.failures.len(),
        "Done"
    );
    if report.is_complete() {
        EXIT_SUCCESS
    } else {
        EXIT_PAGE_FAILURES
    }
}

fn exit_code_for(err: &Page2PdfError) -> u8 {
    if err.is_usage_error() {
        EXIT_USAGE
    } else {
        EXIT_PAGE_FAILURES
    }
}
