//! Mode - POSIX permission bits

use super::SyncError;
use std::fmt;
use std::fs::Metadata;
use std::ops::BitOr;
use std::str::FromStr;

/// Permission bits of a file or directory (rwx for owner/group/other plus
/// setuid, setgid and sticky).
///
/// File type bits reported by the OS are always masked off, so two `Mode`s
/// compare equal exactly when their permissions do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode(u32);

impl Mode {
    /// Every bit a `Mode` may carry
    pub const MASK: u32 = 0o7777;

    /// Build a mode, rejecting bits outside [`Mode::MASK`]
    pub fn new(bits: u32) -> Result<Self, SyncError> {
        if bits & !Self::MASK != 0 {
            return Err(SyncError::Config(format!(
                "Mode {:o} is not a valid permission mask (max {:o})",
                bits,
                Self::MASK
            )));
        }
        Ok(Self(bits))
    }

    /// Build a mode, silently dropping bits outside [`Mode::MASK`]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw permission bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if any of `bits` is set
    pub const fn intersects(self, bits: u32) -> bool {
        self.0 & bits != 0
    }

    /// Permission bits of an existing filesystem entry
    #[cfg(unix)]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::from_bits_truncate(metadata.permissions().mode())
    }

    /// Permission bits of an existing filesystem entry
    ///
    /// Non-Unix platforms only expose a read-only flag.
    #[cfg(not(unix))]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        if metadata.permissions().readonly() {
            Self(0o444)
        } else {
            Self(0o644)
        }
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl FromStr for Mode {
    type Err = SyncError;

    /// Parse an octal mode such as `644` or `0755`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix("0O"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(SyncError::Config("Mode value is empty".to_string()));
        }

        let bits = u32::from_str_radix(digits, 8)
            .map_err(|_| SyncError::Config(format!("Mode '{}' is not an octal number", s)))?;
        Mode::new(bits)
    }
}

impl fmt::Octal for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
