use clap::{Args, Parser, Subcommand};
use museum_mapper::export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "museum-mapper")]
#[command(about = "Object name classification and thesaurus mapping for museum collections", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Configuration file (default: ./museum-mapper.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Name census CSV
    #[arg(long, global = true)]
    pub census: Option<PathBuf>,

    /// Cleanup table CSV
    #[arg(long, global = true)]
    pub mapping: Option<PathBuf>,

    /// Thesaurus CSV
    #[arg(long, global = true)]
    pub thesaurus: Option<PathBuf>,

    /// CSV field delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    /// Log debug detail to stderr (MUSEUM_MAPPER_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize object names (all census names when none are given)
    Classify {
        names: Vec<String>,

        /// Show which rule fired
        #[arg(long)]
        evidence: bool,
    },

    /// Resolve object names through the cleanup table
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Navigate the thesaurus below a hierarchical code
    Tree {
        /// Dotted code, e.g. AUT.AAA.AAC
        code: String,

        /// Only print the code's depth
        #[arg(long, conflicts_with_all = ["children", "subtree"])]
        depth_only: bool,

        /// Immediate children only
        #[arg(long, conflicts_with = "subtree")]
        children: bool,

        /// Full subtree (default)
        #[arg(long)]
        subtree: bool,
    },

    /// Search the thesaurus
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },

    /// Suggest thesaurus entries for object names
    Match {
        #[arg(required = true)]
        names: Vec<String>,

        /// Minimum confidence for automatic acceptance (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
    },

    /// Aggregate census, cleanup table and thesaurus into a report
    Report {
        /// Print JSON instead of the console report
        #[arg(long)]
        json: bool,

        /// Length of the most-frequent-names list
        #[arg(long)]
        top: Option<usize>,

        /// Example names shown per category
        #[arg(long)]
        examples: Option<usize>,

        /// Highest frequency queued for thesaurus matching
        #[arg(long)]
        review_cap: Option<u64>,

        /// Minimum confidence for automatic acceptance (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
    },

    /// Export per-name results
    Export {
        /// Output format: json or csv
        #[arg(long, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file
        #[arg(long)]
        out: PathBuf,

        /// Minimum confidence for automatic acceptance (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
    },
}

#[derive(Subcommand)]
pub enum SearchCommands {
    /// Case-insensitive substring search over terms
    Term { pattern: String },

    /// Raw code prefix scan (not segment aware)
    Prefix { prefix: String },

    /// Synonyms and variants sharing a term master id
    Variants { master_id: String },

    /// Node with the given term id
    Id { term_id: String },
}
