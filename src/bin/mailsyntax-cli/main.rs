mod args;
mod output;

use anyhow::{Context, Result};
use mailsyntax::{ValidationReport, validate_email};

use std::io::{self, BufRead};

use args::{Cli, Commands, mode_from_str};

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    use tracing_subscriber::prelude::*;

    // rien n'est installé sans RUST_LOG
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    #[cfg(feature = "with-tracing")]
    init_tracing();

    let cli = Cli::parse();
    let mut mode = cli.parsed_mode();
    let mut rows: Vec<ValidationReport> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(validate_email(&email, mode));
        }
    } else if let Some(Commands::Validate {
        mode: sub_mode,
        email,
    }) = &cli.cmd
    {
        if let Some(m) = sub_mode.as_deref() {
            mode = mode_from_str(m); // la sous-commande a priorité
        }
        rows.push(validate_email(email, mode));
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    if output::any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}
