//! slidecast binary entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use slidecast::cli::{Cli, Commands, ConfigCommands};
use slidecast::theme::{init_theme, Theme};
use slidecast::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    init_theme(Theme::by_name(&config.player.theme).unwrap_or_default());
    let target = logging::target_for(&config.logging, cli.command.is_interactive());
    logging::init(&config.logging, &target)?;

    match cli.command {
        Commands::Play {
            deck,
            slide,
            autoplay,
            speed,
        } => commands::play::handle(&config, deck, slide, autoplay, speed),
        Commands::Slides { deck, json } => commands::slides::handle(&config, deck, json),
        Commands::Check { deck } => commands::check::handle(&deck),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "slidecast", &mut std::io::stdout());
            Ok(())
        }
    }
}
