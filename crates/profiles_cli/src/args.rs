use clap::{Args, Parser, Subcommand};
use profiles_core::{Source, SourceFilter};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "profiles",
    version,
    about = "List and add professional profiles",
    long_about = "Lists and adds professional profiles against a seeded in-process store.\n\nExamples:\n  profiles list --source partner\n  profiles list --page 2 --page-size 4\n  profiles add --name \"Jane Doe\" --email jane@example.com --company Acme --title CTO"
)]
pub struct CliArgs {
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        global = true,
        help = "Log level (trace|debug|info|warn|error). Defaults to PROFILES_LOG or the build default."
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show one page of profiles.
    List(ListArgs),
    /// Validate and create a profile, then show the refreshed first page.
    Add(AddArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(
        short = 's',
        long,
        value_name = "SOURCE",
        default_value = "all",
        help = "Filter by source (all|direct|partner|internal)."
    )]
    pub source: SourceFilter,

    #[arg(short = 'p', long, value_name = "N", default_value_t = 1, help = "Page to show.")]
    pub page: usize,

    #[arg(
        long = "page-size",
        value_name = "N",
        help = "Items per page. Defaults to PROFILES_PAGE_SIZE or 30."
    )]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long, value_name = "NAME", help = "Full name.")]
    pub name: String,

    #[arg(long, value_name = "EMAIL", default_value = "", help = "Email (optional).")]
    pub email: String,

    #[arg(long, value_name = "PHONE", default_value = "", help = "Phone (optional).")]
    pub phone: String,

    #[arg(long, value_name = "COMPANY", default_value = "", help = "Company name.")]
    pub company: String,

    #[arg(long, value_name = "TITLE", default_value = "", help = "Job title.")]
    pub title: String,

    #[arg(long, value_name = "SOURCE", default_value = "direct", help = "Source (direct|partner|internal).")]
    pub source: Source,
}
