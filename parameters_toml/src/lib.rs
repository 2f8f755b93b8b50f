//! Display parameters, read once from parameters.toml.

// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]

use anyhow::{bail, Context, Result};
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct Parameters {
    /// Emit ANSI color and reverse video when drawing sequences.
    use_color: bool,
    /// Character drawn at query positions that fill in for a germline deletion.
    deletion_filler: char,
    /// Character drawn where columns are added so the deletion labels fit.
    gap_filler: char,
}

const DEFAULT_PARAMETERS: Parameters = Parameters {
    use_color: true,
    deletion_filler: '*',
    gap_filler: '-',
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

static PARAMETERS: OnceLock<Result<Parameters>> = OnceLock::new();
static PARAMETERS_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Read parameters from `path` instead of the parameters.toml that sits next to
/// the running executable.  Must be called before any getter.
pub fn set_parameters_path(path: PathBuf) -> Result<()> {
    if PARAMETERS.get().is_some() {
        bail!("parameters were already loaded, cannot switch to {}", path.display());
    }
    PARAMETERS_PATH
        .set(path)
        .map_err(|p| anyhow::anyhow!("parameters path already set, ignoring {}", p.display()))
}

fn load_parameters(path: &Path) -> Result<Parameters> {
    if !path.exists() {
        warn!(
            "could not find parameters.toml at {}, falling back to defaults",
            path.display()
        );
        Ok(DEFAULT_PARAMETERS)
    } else {
        let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        Ok(toml::from_str(&s).with_context(|| path.display().to_string())?)
    }
}

/// Return a reference to the global parameters.
/// The parameters may need to be loaded; if loading fails, return Err.
fn parameters() -> &'static Result<Parameters> {
    PARAMETERS.get_or_init(|| {
        let path = match PARAMETERS_PATH.get() {
            Some(path) => path.clone(),
            None => std::env::current_exe()
                .context("Unable to locate the running executable")?
                .with_file_name("parameters.toml"),
        };
        load_parameters(&path)
    })
}

macro_rules! parameter_getter {
    ($a:ident, $t:ty) => {
        pub fn $a() -> Result<&'static $t> {
            let val = match parameters() {
                Err(e) => return Err(anyhow::anyhow!("{e:#}")),
                Ok(p) => &p.$a,
            };
            if DEFAULT_PARAMETERS.$a != *val {
                warn!("using non-default {} = {:?}", stringify!($a), val);
            }
            Ok(val)
        }
    };
}

parameter_getter!(use_color, bool);
parameter_getter!(deletion_filler, char);
parameter_getter!(gap_filler, char);
