//! sectionize CLI - split layout-analysis results into index records

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sectionize::index::IndexSchema;
use sectionize::{
    detect_format_from_path, page_map_from_text, parse_file, InputFormat, JsonFormat,
    SectionRecord, SectionizeResult, Sectionizer, SplitOptions,
};

#[derive(Parser)]
#[command(name = "sectionize")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Split layout-analysis results into overlapping search index sections", long_about = None)]
struct Cli {
    /// Input files (analysis JSON or plain text)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    sections: SectionArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split files into index records
    Sections {
        /// Input files (analysis JSON or plain text)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        sections: SectionArgs,
    },

    /// Print the page map of a file
    Pages {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Treat the input as plain text
        #[arg(long)]
        text: bool,
    },

    /// Show document and section statistics
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Treat the input as plain text
        #[arg(long)]
        text: bool,
    },

    /// Print the search index schema as JSON
    Schema {
        /// Index name
        #[arg(long, env = "SECTIONIZE_INDEX", default_value = "gptkbindex")]
        name: String,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct SectionArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Category attached to every record
    #[arg(long, env = "SECTIONIZE_CATEGORY")]
    category: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Target section length in characters
    #[arg(long, default_value_t = sectionize::split::MAX_SECTION_LENGTH)]
    max_length: usize,

    /// Characters shared between consecutive sections
    #[arg(long, default_value_t = sectionize::split::SECTION_OVERLAP)]
    overlap: usize,

    /// How far past the target length to look for a sentence ending
    #[arg(long, default_value_t = sectionize::split::SENTENCE_SEARCH_LIMIT)]
    search_limit: usize,

    /// Treat inputs as plain text with form-feed separated pages
    #[arg(long)]
    text: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// Compact JSON array
    Compact,
    /// One JSON record per line
    Lines,
}

impl From<OutputFormat> for JsonFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => JsonFormat::Pretty,
            OutputFormat::Compact => JsonFormat::Compact,
            OutputFormat::Lines => JsonFormat::Lines,
        }
    }
}

impl SectionArgs {
    fn split_options(&self) -> SplitOptions {
        SplitOptions::new()
            .with_max_section_length(self.max_length)
            .with_section_overlap(self.overlap)
            .with_sentence_search_limit(self.search_limit)
    }

    fn sectionizer(&self) -> Sectionizer {
        let builder = Sectionizer::new().with_split_options(self.split_options());
        match &self.category {
            Some(category) => builder.with_category(category),
            None => builder,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Sections { inputs, sections }) => cmd_sections(&inputs, &sections),
        Some(Commands::Pages { input, text }) => cmd_pages(&input, text),
        Some(Commands::Info { input, text }) => cmd_info(&input, text),
        Some(Commands::Schema { name }) => cmd_schema(&name),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: split if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: sectionize <FILE>... [-o OUTPUT]".yellow());
                println!("       sectionize --help for more information");
                Ok(())
            } else {
                cmd_sections(&cli.inputs, &cli.sections)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load one input, honoring the plain-text override.
fn load(
    builder: Sectionizer,
    input: &Path,
    force_text: bool,
) -> Result<SectionizeResult, Box<dyn std::error::Error>> {
    if !force_text {
        return Ok(builder.load(input)?);
    }
    let text = fs::read_to_string(input)?;
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(builder.with_source_file(name).load_text(&text)?)
}

fn collect_records(
    inputs: &[PathBuf],
    args: &SectionArgs,
) -> Result<Vec<SectionRecord>, Box<dyn std::error::Error>> {
    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut records = Vec::new();
    for input in inputs {
        if let Some(pb) = &pb {
            pb.set_message(input.display().to_string());
        }
        let result = load(args.sectionizer(), input, args.text)?;
        let file_records = result.records()?;
        log::info!("{}: {} sections", input.display(), file_records.len());
        records.extend(file_records);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done!");
    }
    Ok(records)
}

fn cmd_sections(inputs: &[PathBuf], args: &SectionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let records = collect_records(inputs, args)?;
    let output = sectionize::render::to_json(&records, args.format.into())?;

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
        println!(
            "{} {} records to {}",
            "Saved".green(),
            records.len(),
            path.display()
        );
    } else {
        print!("{}", output);
        if args.format != OutputFormat::Lines {
            println!();
        }
    }

    Ok(())
}

fn cmd_pages(input: &Path, text: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = load(Sectionizer::new(), input, text)?;
    let map = result.page_map();

    println!(
        "{:>6}  {:>10}  {:>10}",
        "Page".bold(),
        "Offset".bold(),
        "Length".bold()
    );
    println!("{}", "─".repeat(30).dimmed());
    for entry in map.entries() {
        println!(
            "{:>6}  {:>10}  {:>10}",
            entry.page_number,
            entry.offset,
            entry.char_len()
        );
    }
    println!("{}", "─".repeat(30).dimmed());
    println!("{}: {}", "Total characters".bold(), map.char_len());

    Ok(())
}

fn cmd_info(input: &Path, text: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = if text {
        InputFormat::PlainText
    } else {
        detect_format_from_path(input)?
    };

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    let map = match format {
        InputFormat::AnalysisJson => {
            let analysis = parse_file(input)?;
            let merged = analysis.tables.iter().filter(|t| t.has_merged_cells()).count();
            println!("{}: {}", "Pages".bold(), analysis.page_count());
            println!("{}: {}", "Tables".bold(), analysis.tables.len());
            println!("{}: {}", "Tables with merged cells".bold(), merged);
            sectionize::linearize(&analysis)
        }
        InputFormat::PlainText => {
            let map = page_map_from_text(&fs::read_to_string(input)?);
            println!("{}: {}", "Pages".bold(), map.entry_count());
            map
        }
    };

    let sections = sectionize::split_sections(&map, &SplitOptions::default())?;
    let longest = sections.iter().map(|s| s.char_len()).max().unwrap_or(0);

    println!();
    println!("{}", "Section Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Characters".bold(), map.char_len());
    println!("{}: {}", "Sections".bold(), sections.len());
    println!("{}: {}", "Longest section".bold(), longest);

    Ok(())
}

fn cmd_schema(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let schema = IndexSchema::new(name);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "sectionize".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout-analysis section splitter for search indexing");
    println!();
    println!("License: MIT");
}
