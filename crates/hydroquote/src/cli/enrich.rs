//! The `notes` and `describe` commands.
//!
//! Both print the generated text to stdout, or the input unchanged when
//! enrichment is not possible. Reasons for a fallback only go to the log.

use anyhow::Context;
use clap::{Args, ValueEnum};
use hydroquote_core::{Config, Enricher, ItemCategory};
use std::path::PathBuf;

use super::theme::spinner;

/// Arguments for the `notes` command.
#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Current notes text (empty or omitted asks for standard topics)
    #[arg(conflicts_with = "file")]
    pub notes: Option<String>,

    /// Read the current notes from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Short label for the kind of project
    #[arg(short, long, default_value = "Impermeabilização")]
    pub project_type: String,
}

/// Line-item category accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Category {
    /// Material supplied
    Material,
    /// Labor or service
    Labor,
}

impl From<Category> for ItemCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Material => ItemCategory::Material,
            Category::Labor => ItemCategory::Labor,
        }
    }
}

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Keyword or short idea for the line item
    #[arg(default_value = "")]
    pub keyword: String,

    /// Line-item category
    #[arg(short, long, value_enum, default_value = "material")]
    pub category: Category,
}

/// Execute the notes command.
pub async fn execute_notes(args: NotesArgs, config: Config) -> anyhow::Result<()> {
    let notes = read_notes(&args)?;
    let enricher = Enricher::from_config(&config.llm);

    let pb = spinner("Refining notes...");
    let refined = enricher.refine_notes(&notes, &args.project_type).await;
    pb.finish_and_clear();

    println!("{refined}");
    Ok(())
}

/// Execute the describe command.
pub async fn execute_describe(args: DescribeArgs, config: Config) -> anyhow::Result<()> {
    let enricher = Enricher::from_config(&config.llm);

    let pb = spinner("Suggesting description...");
    let description = enricher
        .suggest_description(args.category.into(), &args.keyword)
        .await;
    pb.finish_and_clear();

    println!("{description}");
    Ok(())
}

fn read_notes(args: &NotesArgs) -> anyhow::Result<String> {
    match (&args.notes, &args.file) {
        (Some(notes), _) => Ok(notes.clone()),
        (None, Some(path)) => {
            let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read notes from {}", path.display()))
        }
        (None, None) => Ok(String::new()),
    }
}
