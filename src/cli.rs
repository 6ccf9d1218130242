use crate::error::Result;
use crate::model::PhotoRef;
use std::convert::Infallible;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: photo-gallery [--config <path>] [PHOTO ...]";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub config_path: Option<PathBuf>,
    /// Replaces the sample set when non-empty.
    pub photos: Vec<PhotoRef>,
}

impl Flags {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args_os().skip(1).collect())
    }

    pub fn from_args(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let config_path = args.opt_value_from_os_str("--config", parse_path)?;
        let rest = args.finish();

        let unknown: Vec<String> = rest
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .filter(|arg| arg.starts_with("--"))
            .collect();
        if !unknown.is_empty() {
            return Err(pico_args::Error::UnusedArgsLeft(unknown).into());
        }

        let photos = rest
            .into_iter()
            .map(|arg| PhotoRef::from(PathBuf::from(arg)))
            .collect();

        Ok(Self {
            config_path,
            photos,
        })
    }
}

fn parse_path(value: &OsStr) -> std::result::Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}
