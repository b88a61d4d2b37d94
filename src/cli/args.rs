//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Single-user expense tracker over flat CSV files
#[derive(Parser, Debug)]
#[command(name = "trackit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding expenses.csv and categories.csv (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all recorded expenses
    List,

    /// Record a new expense
    Add {
        /// What the money went on
        #[arg(short, long)]
        description: String,

        /// Amount as entered; parsed as a number
        #[arg(short, long)]
        amount: String,

        /// Name of a registered category
        #[arg(short, long)]
        category: String,

        /// Date, yyyy-mm-dd
        #[arg(long)]
        date: String,
    },

    /// Remove the expense at a position shown by `list`
    Remove {
        /// Position from `list`
        index: usize,
    },

    /// Edit the expense at a position shown by `list`, in place
    Edit {
        /// Position from `list`
        index: usize,

        /// New description
        #[arg(short, long)]
        description: String,

        /// New amount
        #[arg(short, long)]
        amount: String,

        /// New category name
        #[arg(short, long)]
        category: String,

        /// New date, yyyy-mm-dd
        #[arg(long)]
        date: String,
    },

    /// List registered categories, defaults first
    Categories,

    /// Register a new category
    AddCategory {
        /// Category name
        name: String,
    },

    /// Current-month total and per-category breakdown
    Summary,
}
