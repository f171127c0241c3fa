//! studydeck CLI: turn books into study decks.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;

use studydeck::config::PipelineConfig;
use studydeck::export::{self, ExportFormat};
use studydeck::pipeline::{StudyBook, StudyPipeline};
use studydeck::source::read_book;
use studydeck::text::slugify;

const UNKNOWN_AUTHOR: &str = "Desconocido";

#[derive(Parser)]
#[command(name = "studydeck", version, about = "Study cards and reading pages from book text")]
struct Cli {
    /// Pipeline configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the minimum number of cards.
    #[arg(long, global = true)]
    min_cards: Option<usize>,

    /// Override the maximum number of cards.
    #[arg(long, global = true)]
    max_cards: Option<usize>,

    /// Override the reading page size in characters.
    #[arg(long, global = true)]
    chunk_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a study deck from a book file.
    Build {
        /// Book file (pdf, epub, html, txt, md).
        file: PathBuf,

        /// Title override; defaults to the book metadata or file name.
        #[arg(long)]
        title: Option<String>,

        /// Author override.
        #[arg(long)]
        author: Option<String>,

        /// Output format: json or markdown.
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show the ranked keywords of a book.
    Keywords {
        file: PathBuf,

        /// Number of keywords to show.
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Show the category a book falls into.
    Category {
        file: PathBuf,

        #[arg(long)]
        title: Option<String>,
    },

    /// Print the reading pages of a book.
    Pages { file: PathBuf },

    /// Build decks for many books in parallel.
    Batch {
        /// Book files.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directory that receives one deck per book.
        #[arg(long)]
        out_dir: PathBuf,

        /// Output format: json or markdown.
        #[arg(long, default_value = "json")]
        format: ExportFormat,
    },

    /// Manage pipeline configuration files.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration to a file.
    Init {
        /// Destination path.
        path: PathBuf,
    },
    /// Print the effective configuration.
    Show,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = effective_config(&cli)?;

    match cli.command {
        Commands::Build {
            file,
            title,
            author,
            format,
            output,
        } => {
            let pipeline = StudyPipeline::new(config)?;
            let book = build_book(&pipeline, &file, title.as_deref(), author.as_deref())?;
            let rendered = export::render(&book, format)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered).into_diagnostic()?;
                    eprintln!(
                        "{} cards, {} pages ({}) -> {}",
                        book.cards.len(),
                        book.pages.len(),
                        book.category,
                        path.display()
                    );
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Keywords { file, top } => {
            let pipeline = StudyPipeline::new(config)?;
            let source = read_book(&file)?;
            for (rank, kw) in pipeline.keywords(&source.text).iter().take(top).enumerate() {
                println!(
                    "{:>3}. {:<24} {:>5} {:>8.2}",
                    rank + 1,
                    kw.word,
                    kw.frequency,
                    kw.score
                );
            }
        }

        Commands::Category { file, title } => {
            let pipeline = StudyPipeline::new(config)?;
            let source = read_book(&file)?;
            let title = title.or(source.title).unwrap_or_default();
            println!("{}", pipeline.category(&source.text, &title));
        }

        Commands::Pages { file } => {
            let pipeline = StudyPipeline::new(config)?;
            let source = read_book(&file)?;
            let pages = pipeline.pages(&source.text);
            let total = pages.len();
            for (i, page) in pages.iter().enumerate() {
                println!("── {}/{total} ──\n{page}\n", i + 1);
            }
        }

        Commands::Batch {
            files,
            out_dir,
            format,
        } => {
            let pipeline = StudyPipeline::new(config)?;
            std::fs::create_dir_all(&out_dir).into_diagnostic()?;

            let mut failed = 0usize;
            for (file, result) in build_all(&pipeline, &files, &out_dir, format) {
                match result {
                    Ok(path) => println!("{} -> {}", file.display(), path.display()),
                    Err(report) => {
                        failed += 1;
                        eprintln!("{}: {report:?}", file.display());
                    }
                }
            }
            if failed > 0 {
                miette::bail!("{failed} of {} books failed", files.len());
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Init { path } => {
                PipelineConfig::default().save(&path)?;
                println!("Wrote default configuration to {}", path.display());
            }
            ConfigAction::Show => {
                let toml = toml::to_string_pretty(&config).into_diagnostic()?;
                print!("{toml}");
            }
        },
    }

    Ok(())
}

/// Configuration file (or defaults) with command-line overrides applied.
fn effective_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(n) = cli.min_cards {
        config.min_cards = n;
    }
    if let Some(n) = cli.max_cards {
        config.max_cards = n;
    }
    if let Some(n) = cli.chunk_size {
        config.chunk_size = n;
    }
    Ok(config)
}

fn build_book(
    pipeline: &StudyPipeline,
    file: &Path,
    title: Option<&str>,
    author: Option<&str>,
) -> Result<StudyBook> {
    let source = read_book(file)?;
    let title = title
        .map(str::to_string)
        .or(source.title)
        .unwrap_or_default();
    let author = author
        .map(str::to_string)
        .or(source.author)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    Ok(pipeline.process(&source.text, &title, &author)?)
}

/// Build and write one deck per file in parallel, keeping input order.
fn build_all(
    pipeline: &StudyPipeline,
    files: &[PathBuf],
    out_dir: &Path,
    format: ExportFormat,
) -> Vec<(PathBuf, Result<PathBuf>)> {
    files
        .par_iter()
        .map(|file| {
            let written = build_book(pipeline, file, None, None)
                .and_then(|book| write_deck(&book, out_dir, format));
            (file.clone(), written)
        })
        .collect()
}

fn write_deck(book: &StudyBook, out_dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    let stem = match slugify(&book.title) {
        s if s.is_empty() => book.id.clone(),
        s => s,
    };
    let path = out_dir.join(format!("{stem}.{}", format.extension()));
    std::fs::write(&path, export::render(book, format)?).into_diagnostic()?;
    Ok(path)
}
