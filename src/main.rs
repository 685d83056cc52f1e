//! ly2mei: convert LilyPond source files to MEI
//!
//! Reads the whitelisted LilyPond subset from a file, converts it, and
//! writes the MEI document next to the source. The conversion itself is
//! all-or-nothing: any decoding failure aborts with a message and a
//! non-zero exit status.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use ly2mei::{convert_score, diagnostics, emit_mei, Dialect, RandomIdAllocator};

/// Convert a LilyPond source file to MEI
#[derive(Parser)]
#[command(name = "ly2mei")]
#[command(about = "Convert LilyPond source files to MEI")]
#[command(version)]
struct Cli {
    /// Path to the LilyPond source file
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))?;

    let mut ids = RandomIdAllocator;
    let doc = convert_score(&source, Dialect::Enhanced, &mut ids)?;

    let report = diagnostics::check_document(&doc);
    if report.has_errors() {
        for mark in &report.marks {
            log::error!("{}: {}", mark.kind, mark.message);
        }
        bail!("document failed consistency checks");
    }

    let xml = emit_mei(&doc);
    print!("{xml}");

    let out_path = cli.input.with_extension("mei");
    fs::write(&out_path, &xml)
        .with_context(|| format!("could not write {}", out_path.display()))?;
    log::info!("wrote {}", out_path.display());

    Ok(())
}
