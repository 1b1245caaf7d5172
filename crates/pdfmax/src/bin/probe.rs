// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manual probe: evaluate a mixture over a ladder of significances and report
//! the deviation from a tight reference evaluation.

use clap::Parser;
use pdfmax::{pdf_max, Gaussian, MaxEstimate, PdfMaxError};

/// Probe the accuracy of pdf_max for one set of Gaussians
#[derive(Parser, Debug)]
#[command(name = "pdfmax-probe", version)]
#[command(about = "Evaluate the maximum of Gaussians over a ladder of significances")]
struct Cli {
    /// Components as MU:SIGMA pairs
    #[arg(
        value_name = "MU:SIGMA",
        required = true,
        allow_hyphen_values = true,
        value_parser = parse_component
    )]
    components: Vec<Gaussian>,

    /// Significance to evaluate at (repeatable, default 1e-1 down to 1e-10)
    #[arg(short, long)]
    significance: Vec<f64>,

    /// Significance of the reference evaluation
    #[arg(long, default_value_t = 1e-12)]
    reference: f64,
}

fn parse_component(s: &str) -> Result<Gaussian, String> {
    let (mu, sigma) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MU:SIGMA, got '{}'", s))?;
    let mu = mu.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let sigma = sigma.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Gaussian::new(mu, sigma))
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PdfMaxError> {
    let ladder: Vec<f64> = if cli.significance.is_empty() {
        (1..=10).map(|i| 10f64.powi(-i)).collect()
    } else {
        cli.significance.clone()
    };

    let reference = pdf_max(&cli.components, cli.reference)?;

    for significance in ladder {
        let estimate = pdf_max(&cli.components, significance)?;
        print_probe(&cli.components, significance, &estimate, &reference);

        // Exact results do not depend on the significance
        if estimate.is_exact() {
            break;
        }
    }
    Ok(())
}

fn print_probe(
    components: &[Gaussian],
    significance: f64,
    estimate: &MaxEstimate,
    reference: &MaxEstimate,
) {
    for (i, (component, (odds, ref_odds))) in components
        .iter()
        .zip(estimate.odds.iter().zip(&reference.odds))
        .enumerate()
    {
        println!(
            "component[{}] = {{ {:.17}, {:.17} }}, odds[{}] = {:.17} +/- {:.17}",
            i,
            component.mu,
            component.sigma,
            i,
            odds,
            (odds - ref_odds).abs()
        );
    }
    println!("significance = {:.17}", significance);
    println!(
        "mu           = {:.17} +/- {:.17}",
        estimate.mu,
        (estimate.mu - reference.mu).abs()
    );
    println!(
        "sigma        = {:.17} +/- {:.17}",
        estimate.sigma,
        (estimate.sigma - reference.sigma).abs()
    );
    println!("odds sum     = {:.17}", estimate.odds_sum());
    println!("segments     = {}", estimate.segments);
    println!();
}
