use std::{
    fs::File,
    io::{BufReader, BufWriter},
    process,
};

use clap::Parser;
use located_error::LocatedError;
use log::error;

use parser::{Cli, Commands};
use vcfc_io::sparse::{self, SparseLayout};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();
    let verbosity = cli.verbose + u8::from(!cli.quiet);
    logger::Logger::init(verbosity);

    if let Err(err) = cli.serialize() {
        error!("{err}");
    }

    if let Err(err) = run(&cli.commands) {
        error!("{err:?}");
        process::exit(1);
    }
}

/// Validate the CLI's paths, open the files, and dispatch to the requested core operation.
fn run(commands: &Commands) -> anyhow::Result<()> {
    commands.check_distinct_paths().loc("validating --input/--output paths")?;
    let (input, output) = commands.paths();

    match commands {
        Commands::Compress { .. } => {
            let mut reader = BufReader::new(File::open(input).loc("opening input file")?);
            let mut writer = BufWriter::new(File::create(output).loc("creating output file")?);
            vcfc_io::compress(&mut reader, &mut writer).loc("compressing VCF file")?;
        }
        Commands::Decompress { .. } => {
            let mut reader = BufReader::new(File::open(input).loc("opening input file")?);
            let mut writer = BufWriter::new(File::create(output).loc("creating output file")?);
            vcfc_io::decompress(&mut reader, &mut writer).loc("decompressing VCF file")?;
        }
        Commands::SparseIndex { .. } => {
            let mut reader = BufReader::new(File::open(input).loc("opening input file")?);
            let mut writer = BufWriter::new(File::create(output).loc("creating output file")?);
            let layout =
                SparseLayout::new(sparse::DEFAULT_BLOCK_SIZE, sparse::DEFAULT_MULTIPLICATION_FACTOR, sparse::DEFAULT_MAX_POSITION);
            sparse::sparsify(&mut reader, &mut writer, layout).loc("building sparse index")?;
        }
    }
    Ok(())
}
