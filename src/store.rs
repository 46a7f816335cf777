//! Credential records and the users file
//!
//! The on-disk format is fixed by the consuming Radicale server: UTF-8 text,
//! `\n`-terminated lines, `#`-prefixed comment lines ignored, data lines of
//! the form `username:hash`. Records are written verbatim with no quoting or
//! escaping, so a username containing `:` or a newline corrupts the file;
//! the format has no way to express such names and callers that care must
//! refuse them before writing.
//!
//! Writes are plain buffered file I/O with no locking. A concurrent reader
//! (or a second writer) can observe a partially written line.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use errors::*;

/// Comment lines written at the top of a freshly created users file.
///
/// Only emitted when the file starts from empty; appending to an existing
/// file never repeats them.
pub const FILE_HEADER: [&'static str; 2] = [
    "# Radicale users file",
    "# Format: username:password_hash",
];

/// A single `username:hash` line.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialRecord {
    /// The login name, stored exactly as supplied.
    pub username: String,
    /// Bcrypt hash string in modular-crypt format. Never the plaintext.
    pub hash: String,
}

impl CredentialRecord {
    /// Constructs a record from an already-hashed password.
    pub fn new<U, H>(username: U, hash: H) -> Self
    where
        U: Into<String>,
        H: Into<String>,
    {
        CredentialRecord {
            username: username.into(),
            hash: hash.into(),
        }
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.username, self.hash)
    }
}

/// How a write interacts with existing file contents.
///
/// The caller decides the mode; nothing in this module inspects the console
/// or guesses from context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteMode {
    /// The file does not exist yet; write the header and the record.
    Create,
    /// Keep existing records and add one line at the end.
    Append,
    /// Discard existing contents, then write the header and the record.
    Overwrite,
}

impl WriteMode {
    /// The header pair is emitted whenever the file starts from empty.
    pub fn writes_header(&self) -> bool {
        match *self {
            WriteMode::Create | WriteMode::Overwrite => true,
            WriteMode::Append => false,
        }
    }
}

/// Selects the users file location for this invocation.
///
/// Prefers `primary` when it already exists (the live server file).
/// Otherwise ensures the parent directory of `fallback` exists, creating it
/// on demand, and returns `fallback`. An already-present directory is not an
/// error.
pub fn resolve_users_path(primary: &Path, fallback: &Path) -> Result<PathBuf> {
    if primary.exists() {
        return Ok(primary.to_path_buf());
    }
    if let Some(parent) = fallback.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(fallback.to_path_buf())
}

/// Writes one record to the users file using the selected mode.
///
/// `Create` and `Overwrite` truncate the file and emit the header pair
/// before the record; `Append` adds the record line only. Each record
/// occupies exactly one `\n`-terminated line. I/O errors propagate to the
/// caller.
pub fn write_record(path: &Path, mode: WriteMode, record: &CredentialRecord) -> Result<()> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Append => {
            options.append(true).create(true);
        }
        WriteMode::Create | WriteMode::Overwrite => {
            options.write(true).create(true).truncate(true);
        }
    }

    let mut file = options.open(path)?;
    if mode.writes_header() {
        for line in FILE_HEADER.iter() {
            writeln!(file, "{}", line)?;
        }
    }
    writeln!(file, "{}", record)?;

    info!("wrote record for '{}' to {}", record.username, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_renders_as_colon_separated_line() {
        let record = CredentialRecord::new("alice", "$2b$12$abcdef");
        assert_eq!(record.to_string(), "alice:$2b$12$abcdef");
    }

    #[test]
    fn username_is_not_escaped() {
        // The format cannot express these names; they pass through verbatim.
        let record = CredentialRecord::new("a:b", "$2b$12$abcdef");
        assert_eq!(record.to_string(), "a:b:$2b$12$abcdef");
    }

    #[test]
    fn header_only_on_fresh_contents() {
        assert!(WriteMode::Create.writes_header());
        assert!(WriteMode::Overwrite.writes_header());
        assert!(!WriteMode::Append.writes_header());
    }
}
