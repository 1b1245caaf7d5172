// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pdfmax-check binary entry point.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;

use pdfmax_check::cli::Cli;
use pdfmax_check::exit_codes;
use pdfmax_check::oracle::PdfMaxOracle;
use pdfmax_check::output_diagnostic::{describe_case, print_error, print_note, print_warning};
use pdfmax_check::report::write_report;
use pdfmax_check::run::{RunError, ValidationRun};

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

/// Run the validation and return the exit code of its verdict.
fn run(cli: &Cli) -> Result<i32, RunError> {
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut validation = ValidationRun::new(PdfMaxOracle, cli.significance);
    let verbose = cli.verbose;
    let consumed = validation.consume(reader, |line, errors| {
        if verbose {
            print_note(describe_case(line, errors));
        }
    })?;

    if consumed == 0 {
        print_warning("no test cases in input");
    }

    let judgement = validation.judge();
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &judgement, cli.format)?;

    Ok(judgement.verdict.exit_code())
}
