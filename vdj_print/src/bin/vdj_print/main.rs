//! vdj_print
//!
//! Print annotated query lines for rearrangements read from a JSON file.
#![deny(missing_docs)]

mod mylog;

use anyhow::{Context, Result};
use clap::Parser;
use io_utils::{fwriteln, read_json_one_or_many};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use vdj_print::{draw, RenderOpts};
use vdj_types::Rearrangement;

#[derive(Debug, Parser)]
#[clap(about = "Draw VDJ rearrangements with mutations and conserved codons marked")]
struct Args {
    /// JSON file holding one rearrangement or a list of them.
    input: PathBuf,

    /// Do not emit color escapes, whatever parameters.toml says.
    #[clap(long)]
    plain: bool,

    /// Display parameters to use instead of the parameters.toml next to the
    /// executable.
    #[clap(long)]
    params: Option<PathBuf>,
}

fn render_opts(plain: bool) -> Result<RenderOpts> {
    Ok(RenderOpts {
        color: !plain && *parameters_toml::use_color()?,
        deletion_filler: *parameters_toml::deletion_filler()?,
        gap_filler: *parameters_toml::gap_filler()?,
    })
}

fn print_rearrangement(
    name: &str,
    r: &Rearrangement,
    opts: &RenderOpts,
    log: &mut Vec<u8>,
) -> Result<()> {
    let drawing = draw(r, opts).with_context(|| format!("could not draw {name}"))?;
    fwriteln!(log, "{}", name);
    fwriteln!(log, "    {}", drawing.label_row);
    fwriteln!(log, "    {}", drawing.query_line);
    Ok(())
}

fn main() -> Result<()> {
    mylog::init_log();
    let args = Args::parse();
    if let Some(params) = args.params {
        parameters_toml::set_parameters_path(params)?;
    }
    let opts = render_opts(args.plain)?;

    let rearrangements: Vec<Rearrangement> = read_json_one_or_many(&args.input)?;
    info!(
        "read {} rearrangements from {}",
        rearrangements.len(),
        args.input.display()
    );

    let mut log = Vec::<u8>::new();
    for (i, r) in rearrangements.iter().enumerate() {
        let name = r.name.clone().unwrap_or_else(|| format!("rearrangement {}", i + 1));
        print_rearrangement(&name, r, &opts, &mut log)?;
    }
    std::io::stdout()
        .write_all(&log)
        .context("could not write to stdout")?;
    Ok(())
}
