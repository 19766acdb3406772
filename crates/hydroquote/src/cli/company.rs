//! The `company` command: the company/signatory record shown on quotations.

use anyhow::Context;
use clap::{Args, Subcommand};
use console::Style;
use dialoguer::Input;
use hydroquote_core::{CompanyData, CompanyField, Config, LogoImage};
use std::path::{Path, PathBuf};

use super::handle_interrupt;
use super::theme::hydroquote_theme;

/// Arguments for the `company` command.
#[derive(Args, Debug)]
pub struct CompanyArgs {
    #[command(subcommand)]
    pub command: CompanyCommand,
}

/// Subcommands for the company record.
#[derive(Subcommand, Debug)]
pub enum CompanyCommand {
    /// Display the current company and signatory data
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill in the company and signatory fields interactively
    Edit,

    /// Store an image file as the company logo
    Logo {
        /// PNG, JPG, WebP, GIF or SVG file
        #[arg(required_unless_present = "clear")]
        path: Option<PathBuf>,

        /// Remove the current logo
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },
}

/// Execute the company command.
pub async fn execute(args: CompanyArgs, config: Config) -> anyhow::Result<()> {
    match args.command {
        CompanyCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config.company)?);
            } else {
                print!("{}", render_company(&config.company));
            }
        }

        CompanyCommand::Edit => {
            let path = Config::default_path();
            let saved = load_saved_company(&path)?;
            let Some(company) = edit_company(&saved)? else {
                eprintln!("Cancelled, nothing saved.");
                return Ok(());
            };
            save_company(&path, &company)?;
            tracing::info!("Company data saved to {}", path.display());
        }

        CompanyCommand::Logo { path, clear } => {
            let logo_url = match path {
                Some(path) if !clear => {
                    let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
                    let logo = LogoImage::from_path(&path)
                        .with_context(|| format!("Failed to read logo {}", path.display()))?;
                    logo.data_url()
                }
                _ => String::new(),
            };

            let config_path = Config::default_path();
            // Refuse to touch a file we cannot read back
            load_saved_company(&config_path)?;
            save_logo(&config_path, &logo_url)?;
            if logo_url.is_empty() {
                tracing::info!("Logo removed from {}", config_path.display());
            } else {
                tracing::info!("Logo stored in {}", config_path.display());
            }
        }
    }

    Ok(())
}

/// Prompt for every text field, pre-filled with the current value.
///
/// Returns `None` if the user interrupts the form.
fn edit_company(current: &CompanyData) -> anyhow::Result<Option<CompanyData>> {
    let theme = hydroquote_theme();
    let dim = Style::new().for_stderr().dim();

    eprintln!(
        "  {}",
        dim.apply_to("Estas informações aparecerão no cabeçalho de todos os orçamentos gerados.")
    );

    let mut company = current.clone();
    for field in CompanyField::ALL {
        let value = current.get(field);
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(field.label())
            .allow_empty(true);
        if value.is_empty() {
            eprintln!("  {}", dim.apply_to(field.placeholder()));
        } else {
            input = input.with_initial_text(value);
        }

        let Some(entered) = handle_interrupt(input.interact_text())? else {
            return Ok(None);
        };
        company = company.with_field(field, entered);
    }

    Ok(Some(company))
}

/// Company record as saved on disk.
///
/// Unlike startup, an unreadable or invalid file is an error here: editing on
/// top of the default record would overwrite the saved one with blanks.
fn load_saved_company(config_path: &Path) -> anyhow::Result<CompanyData> {
    if !config_path.exists() {
        return Ok(CompanyData::default());
    }
    let config = Config::load_from(config_path).with_context(|| {
        format!(
            "Refusing to update {}: fix the config file first",
            config_path.display()
        )
    })?;
    Ok(config.company)
}

/// Write the company text fields into `[company]`, preserving everything else.
fn save_company(config_path: &Path, company: &CompanyData) -> anyhow::Result<()> {
    update_company_table(config_path, |table| {
        for field in CompanyField::ALL {
            table[field.key()] = toml_edit::value(company.get(field));
        }
    })
}

/// Write only `company.logo_url`.
fn save_logo(config_path: &Path, logo_url: &str) -> anyhow::Result<()> {
    update_company_table(config_path, |table| {
        table["logo_url"] = toml_edit::value(logo_url);
    })
}

fn update_company_table<F>(config_path: &Path, update: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut toml_edit::Item),
{
    let content = if config_path.exists() {
        std::fs::read_to_string(config_path)?
    } else {
        String::new()
    };

    let mut doc: toml_edit::DocumentMut = content
        .parse()
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    if !doc.contains_key("company") {
        doc["company"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    update(&mut doc["company"]);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, doc.to_string())?;
    Ok(())
}

/// Human-readable summary of the record.
fn render_company(company: &CompanyData) -> String {
    let mut out = String::new();
    for field in CompanyField::ALL {
        let value = company.get(field);
        let value = if value.is_empty() { "-" } else { value };
        out.push_str(&format!("{:<28} {}\n", field.label(), value));
    }
    let logo = if company.has_logo() {
        format!("{} bytes inline", company.logo_url.len())
    } else {
        "-".to_string()
    };
    out.push_str(&format!("{:<28} {}\n", "Logo", logo));
    out
}
