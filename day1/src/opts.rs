use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::ParsePolicy;

/// Where the puzzle input is read from unless a path is given.
pub const DEFAULT_INPUT: &str = "in.dat";

pub const USAGE: &str = "\
usage: day1 [--strict] [PATH]

  PATH        puzzle input, defaults to in.dat
  --strict    fail on lines without two integer fields instead of skipping them
  -h, --help  print this message

Set RUST_LOG to control diagnostics written to stderr (default: warn).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub path: PathBuf,
    pub policy: ParsePolicy,
    pub help: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT),
            policy: ParsePolicy::Lenient,
            help: false,
        }
    }
}

impl Opts {
    /// Parse CLI options, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut path = None;

        for arg in args {
            let Some(s) = arg.to_str() else {
                // Non-utf8 arguments can still be paths.
                if path.replace(PathBuf::from(&arg)).is_some() {
                    bail!("more than one input path given");
                }
                continue;
            };

            match s {
                "--strict" => {
                    opts.policy = ParsePolicy::Strict;
                }
                "-h" | "--help" => {
                    opts.help = true;
                }
                other if other.starts_with('-') && other != "-" => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    if path.replace(PathBuf::from(other)).is_some() {
                        bail!("more than one input path given");
                    }
                }
            }
        }

        if let Some(path) = path {
            opts.path = path;
        }

        Ok(opts)
    }
}
