use clap::Parser;
use memh_image::convert_file;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, Level};

/// Turns a raw binary image into hex text for Verilog's $readmemh
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw binary image, e.g. objcopy -O binary output
    input_file: PathBuf,

    /// Hex text file to create or overwrite
    output_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    debug!("args = {:?}", args);

    let summary = convert_file(&args.input_file, &args.output_file)?;

    info!(
        words = summary.words,
        dropped = summary.dropped,
        "wrote {}",
        args.output_file.display()
    );

    Ok(())
}
