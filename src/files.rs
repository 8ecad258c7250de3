use crate::cleaner::{clean, tally, Tally};
use crate::error::{CleanError, Result};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Clean everything from `input` and write it to `output`.
///
/// Invalid UTF-8 is replaced with U+FFFD. Line endings pass through untouched.
pub fn clean_stream<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    let text = String::from_utf8_lossy(&raw);
    let cleaned = clean(&text);
    debug!("Cleaned stream: {} bytes in, {} bytes out", raw.len(), cleaned.len());
    output.write_all(cleaned.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// What happened to a file that was read successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Cleaned(Tally),
    /// Dry run: the file has gremlins but was left alone
    WouldClean(Tally),
    Unchanged,
}

/// Clean a single file in place.
///
/// Missing paths, non-files and unreadable files come back as skip errors
/// (see [`CleanError::is_skip`]). The file is only rewritten when its
/// content changes, and never when `dry_run` is set.
pub fn process_file(path: &Path, dry_run: bool) -> Result<Outcome> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if resolves_to_nothing(path, &e) => {
            return Err(CleanError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(CleanError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_file() {
        return Err(CleanError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read(path).map_err(|source| CleanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&raw);

    let cleaned = match clean(&text) {
        Cow::Borrowed(_) => {
            debug!("No gremlins in {}", path.display());
            return Ok(Outcome::Unchanged);
        }
        Cow::Owned(cleaned) => cleaned,
    };
    let tally = tally(&text);

    if dry_run {
        debug!(
            "[DRY RUN] Would clean {}: {} replaced, {} removed",
            path.display(),
            tally.replaced,
            tally.removed
        );
        return Ok(Outcome::WouldClean(tally));
    }

    fs::write(path, cleaned.as_bytes()).map_err(|source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Cleaned {}: {} replaced, {} removed",
        path.display(),
        tally.replaced,
        tally.removed
    );

    Ok(Outcome::Cleaned(tally))
}

/// Whether a failed lookup means there is no entry at `path`: a missing
/// component, a regular file used as a directory, or a symlink that never
/// reaches a target (dangling or looping).
fn resolves_to_nothing(path: &Path, e: &io::Error) -> bool {
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => true,
        io::ErrorKind::PermissionDenied => false,
        _ => fs::symlink_metadata(path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false),
    }
}

/// Process every path in order, handing each result to `report` as it comes.
pub fn process_files<I, P, F>(paths: I, dry_run: bool, mut report: F) -> Summary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&Path, &Result<Outcome>),
{
    let mut summary = Summary::default();
    for path in paths {
        let path = path.as_ref();
        let result = process_file(path, dry_run);
        report(path, &result);
        summary.record(&result);
    }

    info!(
        "Processed {} paths: {} cleaned, {} would clean, {} unchanged, {} skipped",
        summary.total(),
        summary.cleaned,
        summary.would_clean,
        summary.unchanged,
        summary.skipped
    );
    summary
}

/// Result of a run over several files
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub cleaned: u64,
    /// Dry run only
    pub would_clean: u64,
    pub unchanged: u64,
    pub skipped: u64,
    pub errors: Vec<String>,
}

impl Summary {
    pub fn record(&mut self, result: &Result<Outcome>) {
        match result {
            Ok(Outcome::Cleaned(_)) => self.cleaned += 1,
            Ok(Outcome::WouldClean(_)) => self.would_clean += 1,
            Ok(Outcome::Unchanged) => self.unchanged += 1,
            Err(e) if e.is_skip() => self.skipped += 1,
            Err(e) => self.errors.push(e.to_string()),
        }
    }

    pub fn total(&self) -> u64 {
        self.cleaned + self.would_clean + self.unchanged + self.skipped + self.errors.len() as u64
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn display_status(&self) -> String {
        let mut status = vec![format!("Files cleaned: {}", self.cleaned)];
        if self.would_clean > 0 {
            status.push(format!("Files that would be cleaned: {}", self.would_clean));
        }
        status.push(format!("Files unchanged: {}", self.unchanged));
        status.push(format!("Paths skipped: {}", self.skipped));

        if self.has_errors() {
            status.push(format!("Errors encountered: {}", self.errors.len()));
        }

        status.join("\n")
    }
}
