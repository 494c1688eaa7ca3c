use regex::Regex;

use crate::{
    config::Config,
    foundation::error::VideoSwitchResult,
    wordcloud::words::{WordEntry, WordList},
};

/// Operator-editable fields next to the "update" button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordForm {
    /// Word to add; empty means "just refresh".
    pub text: String,
    /// Weight as typed.
    pub weight: String,
    /// Inline feedback shown under the form.
    pub message: String,
}

impl WordForm {
    /// Empty form with the weight field at `default_weight`.
    pub fn new(default_weight: u32) -> Self {
        Self {
            text: String::new(),
            weight: default_weight.to_string(),
            message: String::new(),
        }
    }
}

/// Result of one press of "update".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Word appended to the list.
    Added(WordEntry),
    /// Empty text: regenerate without touching the list.
    Refresh,
    /// Text failed the word pattern.
    RejectedWord,
    /// Weight was not a non-negative integer.
    RejectedWeight,
}

impl Submission {
    /// Whether the generator should run after this submission.
    pub fn triggers_regeneration(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Refresh)
    }
}

/// Validates word form input and appends accepted words to the word list.
///
/// Overweight input is clamped, unparseable weight is rejected.
#[derive(Clone, Debug)]
pub struct WordSubmissionGate {
    pattern: Regex,
    max_weight: u32,
    default_weight: u32,
    list: WordList,
}

impl WordSubmissionGate {
    /// Gate using the word pattern, weights and word list from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            pattern: config.word_regex.clone(),
            max_weight: config.max_weight,
            default_weight: config.default_weight,
            list: WordList::new(&config.wordlist_path),
        }
    }

    /// Word list written by this gate.
    pub fn word_list(&self) -> &WordList {
        &self.list
    }

    /// Process the form. Rejections set `form.message` and never touch the
    /// word list; success clears the text and resets the weight field.
    pub fn submit(&self, form: &mut WordForm) -> VideoSwitchResult<Submission> {
        form.message.clear();

        if form.text.is_empty() {
            return Ok(Submission::Refresh);
        }

        if !self.pattern.is_match(&form.text) {
            tracing::warn!(word = %form.text, "invalid word");
            form.message = "Ignored input: Invalid word.".to_string();
            return Ok(Submission::RejectedWord);
        }

        let weight = match form.weight.trim().parse::<u32>() {
            Ok(w) => w.min(self.max_weight),
            Err(_) => {
                tracing::warn!(weight = %form.weight, "invalid weight");
                form.message = format!(
                    "Ignored input: Invalid weight {} (must be a positive integer)",
                    form.weight
                );
                form.weight = self.default_weight.to_string();
                return Ok(Submission::RejectedWeight);
            }
        };

        let entry = WordEntry {
            text: form.text.clone(),
            weight,
        };
        self.list.append(&entry)?;
        tracing::info!(word = %entry.text, weight = entry.weight, "word added");

        form.text.clear();
        form.weight = self.default_weight.to_string();
        Ok(Submission::Added(entry))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wordcloud/gate.rs"]
mod tests;
