use clap::{Parser, Subcommand};
use mailsyntax::ValidationMode;

#[derive(Parser)]
#[command(name = "mailsyntax-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// mode: strict|relaxed (strict rejette les adresses avec warnings)
    #[arg(long, default_value = "relaxed")]
    pub mode: String,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// mode: strict|relaxed (prend le pas sur l'option globale)
        #[arg(long)]
        mode: Option<String>,
        email: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn parsed_mode(&self) -> ValidationMode {
        mode_from_str(&self.mode)
    }
}

pub fn mode_from_str(s: &str) -> ValidationMode {
    match s {
        "strict" => ValidationMode::Strict,
        _ => ValidationMode::Relaxed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_falls_back_to_relaxed() {
        assert_eq!(mode_from_str("strict"), ValidationMode::Strict);
        assert_eq!(mode_from_str("relaxed"), ValidationMode::Relaxed);
        assert_eq!(mode_from_str("whatever"), ValidationMode::Relaxed);
    }

    #[test]
    fn parses_validate_subcommand() {
        let cli = <Cli as Parser>::try_parse_from([
            "mailsyntax-cli",
            "--format",
            "json",
            "validate",
            "--mode",
            "strict",
            "a@b.c",
        ])
        .expect("valid arguments");
        assert_eq!(cli.format, "json");
        assert!(matches!(
            cli.cmd,
            Some(Commands::Validate { mode: Some(ref m), ref email }) if m == "strict" && email == "a@b.c"
        ));
    }
}
