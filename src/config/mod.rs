//! Configuration management

use crate::types::{Mode, SyncError};
use clap::Parser;
use std::path::PathBuf;

/// Mode for created directories when no override is given (rwxr-xr-x)
pub const DEFAULT_DIR_MODE: Mode = Mode::from_bits_truncate(0o755);

/// Forced onto override directory modes so the run can still descend into
/// and create entries inside directories it just made
pub const OWNER_RWX: Mode = Mode::from_bits_truncate(0o700);

/// Added to an unwritable destination file when force is set
pub const OWNER_RW: Mode = Mode::from_bits_truncate(0o600);

/// Owner, group and other write bits
pub const ANY_WRITE_BITS: u32 = 0o222;

/// Owner, group and other read bits
pub const ANY_READ_BITS: u32 = 0o444;

/// Command line interface
#[derive(Debug, Parser)]
#[command(
    name = "treesync",
    version,
    about = "Recursively copy SOURCE into DESTINATION, skipping files that are already up to date",
    long_about = "Recursively copies the contents of SOURCE into DESTINATION.\n\n\
                  A destination file with the same size and a modification time not older \
                  than its source is left alone; everything else is copied. Nothing is ever \
                  deleted from DESTINATION. Behaves like a local `rsync -a SOURCE/ DESTINATION`."
)]
pub struct Cli {
    /// Source directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination directory
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Print every directory made, file skipped and file copied
    #[arg(short, long)]
    pub verbose: bool,

    /// Override permissions of unwritable destination files, if possible
    #[arg(short, long)]
    pub force: bool,

    /// Octal mode for all created files and directories (directories also get u+rwx)
    #[arg(short, long, value_name = "OCTAL", value_parser = parse_mode)]
    pub mode: Option<Mode>,
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value.parse::<Mode>().map_err(|e| e.to_string())
}

/// Fully resolved configuration for one sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination directory
    pub destination: PathBuf,

    /// Explicit mode for created files and directories
    ///
    /// `None` mirrors each source file's own mode and uses
    /// [`DEFAULT_DIR_MODE`] for directories.
    pub mode_override: Option<Mode>,

    /// Chmod unwritable destination files instead of failing
    pub force: bool,

    /// Trace each action on stdout
    pub verbose: bool,
}

impl Config {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Mode used for every directory the run creates
    pub fn directory_mode(&self) -> Mode {
        match self.mode_override {
            Some(mode) => mode | OWNER_RWX,
            None => DEFAULT_DIR_MODE,
        }
    }

    /// Mode for a copied file whose source carries `source_mode`
    pub fn file_mode(&self, source_mode: Mode) -> Mode {
        self.mode_override.unwrap_or(source_mode)
    }
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        // An all-zero mode on the command line means "no override".
        let mode_override = cli.mode.filter(|mode| mode.bits() != 0);

        Ok(Config {
            source: cli.source,
            destination: cli.destination,
            mode_override,
            force: cli.force,
            verbose: cli.verbose,
        })
    }
}
