//! Corpus loading from a directory of prior submissions.
//!
//! Backed by ripgrep's `ignore` crate so `.gitignore`-style rules in a
//! corpus directory are respected. Only files with the configured
//! extensions are read; entries come back sorted by relative path so the
//! corpus order (and therefore match attribution) is deterministic.

use std::path::Path;

use anyhow::{Result, bail};
use ignore::WalkBuilder;
use tracing::warn;

/// One prior submission loaded from disk.
#[derive(Debug, Clone)]
pub struct CorpusEntry
{
    /// Path relative to the corpus root
    pub name: String,

    /// Full file contents
    pub content: String,
}

/// Collect corpus entries under `dir`, keeping files whose extension is in
/// `extensions` (compared case-insensitively, no leading dot).
///
/// Unreadable files are skipped with a warning rather than failing the
/// whole evaluation. A missing directory is an error; an empty one is a
/// valid empty corpus.
pub fn collect_corpus(
    dir: &Path,
    extensions: &[String],
) -> Result<Vec<CorpusEntry>>
{
    if !dir.is_dir()
    {
        bail!("Corpus directory not found: {}", dir.display());
    }

    let walker = WalkBuilder::new(dir)
        .git_ignore(true)
        .git_exclude(true)
        .build();

    let mut entries: Vec<CorpusEntry> = Vec::new();

    for result in walker
    {
        let entry = match result
        {
            Ok(entry) => entry,
            Err(err) =>
            {
                warn!(error = %err, "skipping unreadable corpus entry");
                continue;
            }
        };

        let is_file = entry
            .file_type()
            .is_some_and(|ft| ft.is_file());

        if !is_file || !has_extension(entry.path(), extensions)
        {
            continue;
        }

        let content = match std::fs::read_to_string(entry.path())
        {
            Ok(content) => content,
            Err(err) =>
            {
                warn!(path = %entry.path().display(), error = %err, "skipping unreadable corpus file");
                continue;
            }
        };

        let name = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .display()
            .to_string();

        entries.push(CorpusEntry { name, content });
    }

    // Deterministic order (stable attribution & tests)
    entries.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
    });

    Ok(entries)
}

fn has_extension(
    path: &Path,
    extensions: &[String],
) -> bool
{
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}
