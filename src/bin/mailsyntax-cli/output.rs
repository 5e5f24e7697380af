#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailsyntax::ValidationReport;
#[cfg(feature = "with-csv")]
use mailsyntax::ValidationMode;

pub fn write_reports(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[ValidationReport]) -> bool {
    rows.iter().any(|row| !row.valid)
}

fn write_human(rows: &[ValidationReport]) -> Result<()> {
    for row in rows {
        for line in human_lines(row) {
            println!("{line}");
        }
    }
    Ok(())
}

/// CR/LF/NUL sont échappés pour garder une ligne par adresse.
fn human_lines(row: &ValidationReport) -> Vec<String> {
    let original = row.original.escape_debug();
    let mut lines = Vec::new();
    if row.valid {
        lines.push(format!("[OK]    {original}"));
    } else {
        lines.push(format!("[INVALID] {original} :: {}", row.reasons.join("; ")));
    }
    if row.has_warnings() {
        let codes: Vec<&str> = row.warnings.iter().map(|w| w.code()).collect();
        lines.push(format!("        warnings: {}", codes.join(", ")));
    }
    lines
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &ValidationReport) -> Vec<String> {
    let warnings: Vec<&str> = row.warnings.iter().map(|w| w.code()).collect();
    vec![
        row.original.clone(),
        row.local.clone(),
        row.domain.clone(),
        match row.mode {
            ValidationMode::Strict => "strict",
            ValidationMode::Relaxed => "relaxed",
        }
        .to_string(),
        row.valid.to_string(),
        warnings.join("|"),
        row.error.map(|e| e.code()).unwrap_or_default().to_string(),
        row.reasons.join("|"),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
