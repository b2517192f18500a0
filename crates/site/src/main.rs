//! Freehold website service entry point.
//!
//! USAGE:
//!     freehold-site [serve]
//!     freehold-site order <form.json> [--print]
//!     freehold-site contact <form.json>
//!
//! Task results are written to stdout for the operator, so `println!` is
//! used alongside structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use freehold_core::SubmissionOutcome;
use freehold_infra::{config, observability};
use freehold_site::{cli, AppContext};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("freehold-site failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("loading configuration")?;
    observability::init_logging(&config.logging).context("initialising logging")?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let ctx = AppContext::new(config).context("building application context")?;
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None | Some("serve") => freehold_infra::serve(ctx.site.clone()).await.map_err(Into::into),
        Some("order") => {
            let form = form_path(args.next())?;
            let print = args.any(|arg| arg == "--print");
            let report = cli::run_order(&ctx, &form, print)?;
            println!("{} saved to {}", report.reference, report.download.display());
            if report.printed {
                println!("print document written to {}", ctx.config.order.print_dir.display());
            }
            Ok(())
        }
        Some("contact") => {
            let form = form_path(args.next())?;
            match cli::run_contact(&ctx, &form).await? {
                SubmissionOutcome::Sent => {
                    println!("enquiry sent");
                    Ok(())
                }
                SubmissionOutcome::Invalid { missing } => {
                    let labels: Vec<_> = missing.iter().map(|f| f.label()).collect();
                    Err(anyhow!("missing fields: {}", labels.join(", ")))
                }
                SubmissionOutcome::Failed { message } => Err(anyhow!(message)),
            }
        }
        Some("help") => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            print_help();
            Err(anyhow!("unknown command: {unknown}"))
        }
    }
}

fn form_path(arg: Option<String>) -> anyhow::Result<PathBuf> {
    arg.map(PathBuf::from).ok_or_else(|| anyhow!("expected a path to a JSON form file"))
}

fn print_help() {
    println!("Freehold website service");
    println!();
    println!("USAGE:");
    println!("    freehold-site [serve]                       Serve the site and /api proxy");
    println!("    freehold-site order <form.json> [--print]   Generate an order summary");
    println!("    freehold-site contact <form.json>           Send a contact enquiry");
}
