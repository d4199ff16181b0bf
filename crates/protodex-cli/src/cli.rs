//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// protodex - consistency checker for the game-data index
#[derive(Parser, Debug)]
#[command(name = "protodex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate one combined index document for internal consistency
    ///
    /// Loads the index, runs the fixed check sequence (creatures, items,
    /// objects, maps, defines, duplicate PIDs, orphaned references), writes
    /// the textual report, and exits nonzero if any issue was found.
    Validate {
        /// Path to the index file
        #[arg(long, default_value = "index.json")]
        index: PathBuf,

        /// Where to write the textual report
        #[arg(long, default_value = "validation_report.txt")]
        report: PathBuf,
    },

    /// Verify per-category index documents against the game sources
    ///
    /// Compares tiles.json, critters.json, items.json, objects.json, and
    /// defines.json with the files under the server and client roots. A
    /// missing source degrades to a per-category error; warnings alone
    /// still exit zero.
    Verify {
        /// Server data root
        server: PathBuf,

        /// Client data root
        client: PathBuf,

        /// Directory holding the generated index documents
        #[arg(long, default_value = "source/database")]
        db_dir: PathBuf,
    },

    /// Check configured source files and cross-reference the indexes
    ///
    /// Reads the server .cfg, verifies every configured source file exists,
    /// counts the indexed documents, and runs the script/define
    /// cross-reference scan. Exits nonzero only on errors.
    Sources {
        /// Path to the server .cfg file
        #[arg(long, default_value = "scripts/server.cfg")]
        config: PathBuf,

        /// Directory holding the generated index documents
        #[arg(long, default_value = "source/database")]
        db_dir: PathBuf,
    },
}
