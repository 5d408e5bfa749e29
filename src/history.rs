//! Posted-countries ledger.
//!
//! A newline-delimited text file holding one country name per line. It only
//! ever grows; it is read once at the start of a run and appended to after a
//! successful post.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::BotError;

/// In-memory copy of the ledger, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    names: Vec<String>,
}

impl History {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Loads the ledger from `path`.
    ///
    /// A missing file is the first run and yields an empty history. Blank lines
    /// are skipped.
    pub fn load(path: &Path) -> Result<Self, BotError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "History file {} does not exist yet, starting with an empty history",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(BotError::History {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let names: Vec<String> = contents
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        info!(
            "Loaded {} previously posted countries from {}",
            names.len(),
            path.display()
        );
        Ok(Self { names })
    }

    /// Whether `name` was already posted.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|posted| posted == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Appends `name` as one line to the ledger at `path`.
///
/// The parent directory and the file are created when missing.
pub fn record_posted(path: &Path, name: &str) -> Result<(), BotError> {
    let history_error = |source| BotError::History {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(history_error)?;
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(history_error)?;

    file.write_all(format!("{}\n", name).as_bytes())
        .map_err(history_error)?;

    debug!("Appended '{}' to {}", name, path.display());
    Ok(())
}
