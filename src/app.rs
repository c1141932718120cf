use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use svg2msvg::{ConversionReport, Converter};

pub fn run() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let Cli {} = Cli::parse();

    let converter = Converter::default();
    let mut stdout = io::stdout().lock();

    match converter.run() {
        Ok(report) => {
            print_report(&mut stdout, &report).context("Failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log::debug!("Conversion aborted: {err:?}");
            writeln!(stdout, "{err}").context("Failed to write to stdout")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_report(out: &mut impl Write, report: &ConversionReport) -> io::Result<()> {
    for skipped in &report.skipped {
        writeln!(out, "{skipped}")?;
    }
    writeln!(
        out,
        "✅ {} written successfully.",
        report.output_path.display()
    )
}
