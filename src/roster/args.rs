use clap::{Parser, Subcommand};
use roster::model::SortField;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "In-memory employee directory with search, filtering and pagination", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load seed records from a JSON file instead of the built-in set
    #[arg(long, global = true, value_name = "FILE")]
    pub seed: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees (default command)
    #[command(alias = "ls")]
    List {
        /// Free-text search over names and email
        #[arg(short, long)]
        search: Option<String>,

        /// Exact-match department filter
        #[arg(short, long)]
        department: Option<String>,

        /// Exact-match role filter
        #[arg(short, long)]
        role: Option<String>,

        /// Sort field (first-name, last-name, email, department, role)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Page size
        #[arg(long, default_value_t = 10)]
        per_page: usize,

        /// Emit the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single employee by id
    Show {
        id: u32,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the distinct departments
    Departments,

    /// List the distinct roles
    Roles,

    /// Validate employee form input without adding anything
    Validate {
        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        department: String,

        #[arg(long, default_value = "")]
        role: String,
    },
}
