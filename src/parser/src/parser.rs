use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name = "vcfc", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// vcfc: VCF run-length/bit-pack compressor with an optional sparse random-access layout
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// Multiple levels are allowed: {n}
    /// -v: Info | -vv: Debug | -vvv: Trace {n}
    ///
    /// The program still emits warnings by default, even without this flag. Use
    /// --quiet/-q to disable them.
    #[clap(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even without verbose
    /// mode on. Use this argument to disable this. Only errors will be displayed.
    #[clap(short = 'q', long, global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Log the fully parsed command line arguments as yaml, at debug level.
    ///
    /// # Errors
    /// Returns [`ParserError::Serialize`] if `serde_yaml` fails to serialize `Self`.
    pub fn serialize(&self) -> Result<(), ParserError> {
        let serialized =
            serde_yaml::to_string(&self).map_err(|err| ParserError::Serialize(err.to_string()))?;
        debug!("\n---- Command line args ----\n{serialized}\n---");
        Ok(())
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Compress a plain-text VCF file into its run-length/bit-packed binary form.
    Compress {
        /// Input VCF file (plain text).
        input: PathBuf,
        /// Output file (compressed).
        output: PathBuf,
    },
    /// Decompress a previously compressed file back into plain-text VCF.
    Decompress {
        /// Input file (compressed).
        input: PathBuf,
        /// Output VCF file (plain text).
        output: PathBuf,
    },
    /// Build a sparse random-access layout from an already-compressed file.
    SparseIndex {
        /// Input file (compressed, not already sparse).
        input: PathBuf,
        /// Output file (sparse layout).
        output: PathBuf,
    },
}

impl Commands {
    /// The `(input, output)` paths carried by whichever variant was selected.
    #[must_use]
    pub fn paths(&self) -> (&PathBuf, &PathBuf) {
        match self {
            Commands::Compress { input, output }
            | Commands::Decompress { input, output }
            | Commands::SparseIndex { input, output } => (input, output),
        }
    }

    /// Sanity check: refuse to run when input and output resolve to the same path.
    ///
    /// Performed before any file is opened for writing, so a misuse of the CLI never risks
    /// truncating the input.
    ///
    /// # Errors
    /// Returns [`ParserError::InputEqualsOutput`] if the two paths are equal.
    pub fn check_distinct_paths(&self) -> Result<(), ParserError> {
        let (input, output) = self.paths();
        if input == output {
            return Err(ParserError::InputEqualsOutput(input.display().to_string()));
        }
        Ok(())
    }
}
