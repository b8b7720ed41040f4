//! Config subcommands handler

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use slidecast::config::migrate_config;
use slidecast::theme::{current_theme, Theme};
use slidecast::Config;

/// Print the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    println!("{}", theme.primary_text(&toml::to_string_pretty(config)?));
    Ok(())
}

/// Open the config file in `$EDITOR` (default `vi`), creating it first if needed.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        current_theme().primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;
    Ok(())
}

/// Add missing fields to the config file after showing what would change.
///
/// Writes without asking when `yes` is set; otherwise asks on a TTY and makes
/// no changes when stdin is not interactive.
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s), {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create it with defaults.")
        );
    }
    println!();
    for line in diff_preview(&result.content, &result.added_fields) {
        println!("{}", paint_diff_line(&theme, &line));
    }
    println!();

    let question = format!("Write {}?", config_path.display());
    if !yes && !prompt_confirmation(&theme, &question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), fields = result.added_fields.len(), "config migrated");
    println!("{}", theme.success_text("Config updated."));
    Ok(())
}

/// Lines of the migrated file that are new, prefixed with `+ `.
///
/// Section headers are included (without a prefix when the section already
/// existed) so every added key is shown under its table.
pub fn diff_preview(new_content: &str, added_fields: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section = String::new();
    let mut header: Option<&str> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name.to_string();
            header = Some(line);
            continue;
        }
        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };
        let field = format!("{}.{}", section, key.trim());
        if !added_fields.contains(&field) {
            continue;
        }
        if let Some(h) = header.take() {
            lines.push(if !section_has_existing_keys(new_content, &section, added_fields) {
                format!("+ {}", h)
            } else {
                format!("  {}", h)
            });
        }
        lines.push(format!("+ {}", line));
    }
    lines
}

/// Whether `section` holds keys that were already present before migrating.
fn section_has_existing_keys(content: &str, section: &str, added_fields: &[String]) -> bool {
    let mut in_section = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            in_section = name == section;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((key, _)) = trimmed.split_once('=') {
            if !added_fields.contains(&format!("{}.{}", section, key.trim())) {
                return true;
            }
        }
    }
    false
}

fn paint_diff_line(theme: &Theme, line: &str) -> String {
    if line.starts_with('+') {
        theme.success_text(line)
    } else {
        theme.secondary_text(line)
    }
}

/// Ask a yes/no question. Non-interactive stdin counts as "no".
#[cfg(not(tarpaulin_include))]
fn prompt_confirmation(theme: &Theme, message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
