use std::{
    fs::OpenOptions,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::VideoSwitchResult;

/// One accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WordEntry {
    /// Word text, already validated.
    pub text: String,
    /// Repetitions written to the word list, already clamped.
    pub weight: u32,
}

impl WordEntry {
    /// Line appended for this entry: `weight` copies of `"<text> "`, then `\n`.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity((self.text.len() + 1) * self.weight as usize + 1);
        for _ in 0..self.weight {
            line.push_str(&self.text);
            line.push(' ');
        }
        line.push('\n');
        line
    }
}

/// Append-only word list file read by the generator.
#[derive(Clone, Debug)]
pub struct WordList {
    path: PathBuf,
}

impl WordList {
    /// Word list stored at `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `entry` as one line, creating the file if needed.
    pub fn append(&self, entry: &WordEntry) -> VideoSwitchResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open word list '{}'", self.path.display()))?;
        file.write_all(entry.to_line().as_bytes())
            .with_context(|| format!("append to word list '{}'", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wordcloud/words.rs"]
mod tests;
