//! Clap derive structures for the `oasis` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// oasis -- browse and administer the Oasis community-resource directory
#[derive(Debug, Parser)]
#[command(
    name = "oasis",
    version,
    about = "Browse the Oasis community-resource directory from the command line",
    long_about = "Find community resources -- legal aid, food, housing, education and \n\
        more -- by cost, language, and location. Administrators can sign in to \n\
        create, update, and delete directory entries.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "OASIS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Directory backend URL (overrides profile)
    #[arg(long, env = "OASIS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Auth service URL (overrides profile)
    #[arg(long, env = "OASIS_AUTH_URL", global = true)]
    pub auth_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "OASIS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "OASIS_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and manage directory resources
    #[command(alias = "res", alias = "r")]
    Resources(ResourcesArgs),

    /// View the category taxonomy
    #[command(alias = "cat")]
    Categories(CategoriesArgs),

    /// Manage your saved resources
    Saved(SavedArgs),

    /// Sign in, register, or inspect your session
    Auth(AuthArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RESOURCES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ResourcesArgs {
    #[command(subcommand)]
    pub command: ResourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ResourcesCommand {
    /// List resources, with optional filters
    #[command(alias = "ls")]
    List {
        /// Top-level category (fetches that category only)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Subcategory the resource must belong to
        #[arg(long, short = 's')]
        subcategory: Option<String>,

        /// Cost ceiling: admit this tier and everything cheaper
        #[arg(long, value_enum)]
        cost: Option<CostCeilingArg>,

        /// Language the resource must offer ("All" for no constraint)
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// City the resource must be in ("All" for no constraint)
        #[arg(long)]
        location: Option<String>,

        /// Sort order
        #[arg(long, default_value = "name", value_enum)]
        sort: SortKeyArg,

        /// Only show resources in your saved set (requires sign-in)
        #[arg(long)]
        saved: bool,
    },

    /// Show one resource in full detail
    Get {
        /// Resource id
        id: String,

        /// Your position as "LAT,LNG"; enables the distance field
        #[arg(long)]
        from: Option<String>,
    },

    /// Create a resource from a JSON file (admin)
    Create {
        /// JSON file with the resource document
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Replace a resource from a JSON file (admin)
    Update {
        /// Resource id
        id: String,

        /// JSON file with the replacement document
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Delete a resource (admin)
    Delete {
        /// Resource id
        id: String,
    },
}

/// CLI rendering of the cumulative cost ceiling.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CostCeilingArg {
    /// Free resources only
    Free,
    /// Free and $
    #[value(name = "$")]
    Low,
    /// Free through $$
    #[value(name = "$$")]
    Moderate,
    /// Everything (default)
    #[value(name = "$$$")]
    High,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    /// Alphabetical by name
    Name,
    /// Most expensive first
    Cost,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CATEGORIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories and their subcategories
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SAVED
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SavedArgs {
    #[command(subcommand)]
    pub command: SavedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SavedCommand {
    /// List your saved resources
    #[command(alias = "ls")]
    List,

    /// Add a resource to your saved set
    Add {
        /// Resource id
        id: String,
    },

    /// Remove a resource from your saved set
    Remove {
        /// Resource id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and store the session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Register a new account
    Register {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Check whether the stored token is still valid
    Verify,

    /// Discard the stored session token
    Logout,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a configuration value on the active profile
    Set {
        /// Config key (api_url, auth_url, email, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
