//! Command-line options and the immutable [`Config`] built from them.
//!
//! Every option is accepted as a raw string. Values that do not parse or fall
//! outside their range are logged and ignored, so a typo never prevents the
//! kiosk from starting.

use std::path::PathBuf;

use clap::Parser;
use regex::Regex;

use crate::foundation::{
    clock::Millis,
    error::{VideoSwitchError, VideoSwitchResult},
};

/// Pattern words must match when `--regex` is not given.
pub const DEFAULT_WORD_PATTERN: &str = r"[\w-]+";

/// Raw command-line surface.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "videoswitch",
    version,
    about = "VideoSwitch. Show videos and show word cloud in between."
)]
pub struct RawOptions {
    /// Screen width in pixels.
    #[arg(short = 'W', long, value_name = "int")]
    pub width: Option<String>,

    /// Screen height in pixels.
    #[arg(short = 'H', long, value_name = "int")]
    pub height: Option<String>,

    /// Playlist JSON file path.
    #[arg(long, value_name = "file")]
    pub playlist: Option<String>,

    /// Mask image file path.
    #[arg(long, value_name = "file")]
    pub mask: Option<String>,

    /// Word list file path.
    #[arg(long, value_name = "file")]
    pub wordlist: Option<String>,

    /// Word cloud image file path.
    #[arg(long, value_name = "file")]
    pub image: Option<String>,

    /// Word cloud generator program path.
    #[arg(long, value_name = "file")]
    pub program: Option<String>,

    /// Regular expression a word must fully match.
    #[arg(long, value_name = "string")]
    pub regex: Option<String>,

    /// Maximum weight of a word added to the word list.
    #[arg(long = "max_weight", value_name = "int")]
    pub max_weight: Option<String>,

    /// Default weight of a word added to the word list.
    #[arg(long = "default_weight", value_name = "int")]
    pub default_weight: Option<String>,

    /// Duration of video fading in, in ms.
    #[arg(long = "fade_in_duration", value_name = "int")]
    pub fade_in_duration: Option<String>,

    /// Duration of video fading out, in ms.
    #[arg(long = "fade_out_duration", value_name = "int")]
    pub fade_out_duration: Option<String>,

    /// Duration of the image change transition, in ms.
    #[arg(long = "image_change_duration", value_name = "int")]
    pub image_change_duration: Option<String>,

    /// Font size in the control panel.
    #[arg(long = "font_size", value_name = "int")]
    pub font_size: Option<String>,
}

/// Settings shared by every component, fixed at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Playlist descriptor.
    pub playlist_path: PathBuf,
    /// Mask image handed to the generator.
    pub mask_path: PathBuf,
    /// Append-only word list.
    pub wordlist_path: PathBuf,
    /// Word cloud image written by the generator.
    pub image_path: PathBuf,
    /// Generator program.
    pub program_path: PathBuf,
    /// Word pattern, anchored for full-match checks.
    pub word_regex: Regex,
    /// Upper bound for a word's weight; larger weights are clamped.
    pub max_weight: u32,
    /// Weight field content after reset.
    pub default_weight: u32,
    /// Video fade-in duration.
    pub fade_in_ms: Millis,
    /// Video fade-out duration; also the lead time before a video ends.
    pub fade_out_ms: Millis,
    /// Word cloud cross-fade duration.
    pub image_change_ms: Millis,
    /// Control panel font size.
    pub font_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            playlist_path: PathBuf::from("playlist.json"),
            mask_path: PathBuf::from("mask.png"),
            wordlist_path: PathBuf::from("/tmp/wordlist.txt"),
            image_path: PathBuf::from("/tmp/wordcloud.png"),
            program_path: PathBuf::from("gen_wordcloud.py"),
            word_regex: default_word_regex(),
            max_weight: 100,
            default_weight: 10,
            fade_in_ms: 1000,
            fade_out_ms: 1000,
            image_change_ms: 500,
            font_size: 50,
        }
    }
}

impl Config {
    /// Build a config from raw options, keeping the default for every value
    /// that is missing, empty, unparseable or out of range.
    pub fn from_options(opts: &RawOptions) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = given(&opts.width) {
            match parse_screen_extent(v) {
                Ok(w) => cfg.width = w,
                Err(e) => tracing::warn!("invalid width given: {v:?} ({e})"),
            }
        }
        if let Some(v) = given(&opts.height) {
            match parse_screen_extent(v) {
                Ok(h) => cfg.height = h,
                Err(e) => tracing::warn!("invalid height given: {v:?} ({e})"),
            }
        }

        if let Some(v) = given(&opts.regex) {
            match anchored(v) {
                Ok(re) => cfg.word_regex = re,
                Err(e) => tracing::warn!("invalid value for regex: {v:?} ({e})"),
            }
        }

        if let Some(v) = given(&opts.playlist) {
            cfg.playlist_path = PathBuf::from(v);
        }
        if let Some(v) = given(&opts.image) {
            cfg.image_path = PathBuf::from(v);
        }
        if let Some(v) = given(&opts.program) {
            cfg.program_path = PathBuf::from(v);
        }
        if let Some(v) = given(&opts.mask) {
            cfg.mask_path = PathBuf::from(v);
        }
        if let Some(v) = given(&opts.wordlist) {
            cfg.wordlist_path = PathBuf::from(v);
        }

        if let Some(v) = given(&opts.max_weight) {
            match parse_positive(v) {
                Ok(w) => cfg.max_weight = w,
                Err(e) => tracing::warn!("invalid value for max_weight: {v:?} ({e})"),
            }
        }
        if let Some(v) = given(&opts.default_weight) {
            match parse_positive(v) {
                Ok(w) => cfg.default_weight = w,
                Err(e) => tracing::warn!("invalid value for default_weight: {v:?} ({e})"),
            }
        }

        for (name, raw, slot) in [
            (
                "fade_in_duration",
                &opts.fade_in_duration,
                &mut cfg.fade_in_ms,
            ),
            (
                "fade_out_duration",
                &opts.fade_out_duration,
                &mut cfg.fade_out_ms,
            ),
            (
                "image_change_duration",
                &opts.image_change_duration,
                &mut cfg.image_change_ms,
            ),
        ] {
            if let Some(v) = given(raw) {
                match parse_duration_ms(v) {
                    Ok(ms) => *slot = ms,
                    Err(e) => tracing::warn!("invalid value for {name}: {v:?} ({e})"),
                }
            }
        }

        if let Some(v) = given(&opts.font_size) {
            match parse_font_size(v) {
                Ok(size) => cfg.font_size = size,
                Err(e) => tracing::warn!("invalid value for font_size: {v:?} ({e})"),
            }
        }

        cfg
    }

    /// Font size of the message line under the word form.
    pub fn message_font_size(&self) -> u32 {
        self.font_size / 2
    }
}

fn given(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

fn parse_u32(v: &str) -> VideoSwitchResult<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|e| VideoSwitchError::config(format!("not a non-negative integer: {e}")))
}

fn parse_screen_extent(v: &str) -> VideoSwitchResult<u32> {
    let n = parse_u32(v)?;
    if n > 9 && n < 10_000 {
        Ok(n)
    } else {
        Err(VideoSwitchError::config("must be between 10 and 9999 pixels"))
    }
}

fn parse_positive(v: &str) -> VideoSwitchResult<u32> {
    match parse_u32(v)? {
        0 => Err(VideoSwitchError::config("must be greater than zero")),
        n => Ok(n),
    }
}

fn parse_duration_ms(v: &str) -> VideoSwitchResult<Millis> {
    v.trim()
        .parse::<Millis>()
        .map_err(|e| VideoSwitchError::config(format!("not a duration in ms: {e}")))
}

fn parse_font_size(v: &str) -> VideoSwitchResult<u32> {
    let n = parse_u32(v)?;
    if n > 3 {
        Ok(n)
    } else {
        Err(VideoSwitchError::config("must be greater than 3"))
    }
}

// `DEFAULT_WORD_PATTERN` is a constant known to compile.
fn default_word_regex() -> Regex {
    anchored(DEFAULT_WORD_PATTERN).expect("default word pattern compiles")
}

/// Compile `pattern` so that it only matches whole inputs.
pub fn anchored(pattern: &str) -> VideoSwitchResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|e| VideoSwitchError::config(format!("invalid regex: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
