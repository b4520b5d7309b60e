//! CLI entry point for folio.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_app::PortfolioService;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod commands;
mod config;
mod tui;

/// Browse a developer portfolio from the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "folio: project showcase, detail modal and credentials in the terminal"
)]
struct Cli {
    /// Directory holding `.folio/config.toml` (defaults to current).
    #[arg(long)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects in catalog order.
    Ls {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show every detail of one project.
    Show {
        #[arg(long)]
        project: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the category of each technology tag.
    Classify {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print biography and credentials.
    Profile,

    /// Launch interactive terminal UI.
    Tui,

    /// Write the default keybindings file.
    InitConfig {
        /// Destination (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite without asking.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let Cli { dir, cmd } = Cli::parse();

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    execute_command(dir, cmd)
}

fn execute_command(dir: PathBuf, command: Command) -> Result<()> {
    match command {
        Command::InitConfig { output, force } => config::init_keybindings(output.as_deref(), force),
        Command::Tui => {
            let service = PortfolioService::open(dir)?;
            tui::run(&service)
        }
        other => {
            let service = PortfolioService::open(dir)?;
            commands::run(other, &service)
        }
    }
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Tui)
}

fn install_tracing() {
    // RUST_LOG overrides; INFO otherwise.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        // stdout carries command output, including --json.
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from([
            "folio",
            "--dir",
            "/tmp/site",
            "show",
            "--project",
            "cyperus",
            "--json",
        ]);

        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/site")));
        match cli.cmd {
            Command::Show { project, json } => {
                assert_eq!(project, "cyperus");
                assert!(json);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn parse_classify_requires_tags() {
        assert!(Cli::try_parse_from(["folio", "classify"]).is_err());
        let cli = Cli::parse_from(["folio", "classify", "React", "Docker"]);
        match cli.cmd {
            Command::Classify { tags } => assert_eq!(tags, ["React", "Docker"]),
            _ => panic!("expected classify command"),
        }
    }

    #[test]
    fn parse_init_config_command() {
        let cli = Cli::parse_from(["folio", "init-config", "--output", "keys.toml", "--force"]);
        match cli.cmd {
            Command::InitConfig { output, force } => {
                assert_eq!(output, Some(PathBuf::from("keys.toml")));
                assert!(force);
            }
            _ => panic!("expected init-config command"),
        }
    }

    #[test]
    fn skips_tracing_in_tui_mode() {
        assert!(!should_install_tracing(&Command::Tui));
    }

    #[test]
    fn installs_tracing_for_other_commands() {
        assert!(should_install_tracing(&Command::Ls { json: false }));
        assert!(should_install_tracing(&Command::Profile));
    }
}
