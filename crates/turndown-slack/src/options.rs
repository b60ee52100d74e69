//! Configuration options shared by every Slack rule.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Result};

/// Link style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Use inline links [text](url)
    #[default]
    Inlined,
    /// Use reference links [text][ref]
    Referenced,
    /// Use Slack's angle-bracket links <url|text>
    Slack,
}

impl LinkStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStyle::Inlined => "inlined",
            LinkStyle::Referenced => "referenced",
            LinkStyle::Slack => "slack",
        }
    }
}

impl fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inlined" => Ok(LinkStyle::Inlined),
            "referenced" => Ok(LinkStyle::Referenced),
            "slack" => Ok(LinkStyle::Slack),
            other => Err(Error::InvalidOption(format!("unknown link style '{other}'"))),
        }
    }
}

/// Options passed to every rule replacement.
///
/// Field names deserialize from the camelCase keys turndown uses
/// (`linkStyle`, `fence`, `bulletListMarker`); absent keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlackOptions {
    /// Link style
    pub link_style: LinkStyle,

    /// Fence string for highlighted code blocks
    pub fence: String,

    /// Bullet list marker
    pub bullet_list_marker: char,
}

impl Default for SlackOptions {
    fn default() -> Self {
        Self {
            link_style: LinkStyle::Inlined,
            fence: "```".to_string(),
            bullet_list_marker: '*',
        }
    }
}

impl SlackOptions {
    /// Defaults with Slack-style links switched on
    pub fn slack() -> Self {
        Self {
            link_style: LinkStyle::Slack,
            ..Self::default()
        }
    }

    /// Load options from a JSON object such as
    /// `{"linkStyle": "slack", "bulletListMarker": "-"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SlackOptions = serde_json::from_str(json)?;
        if options.fence.trim().is_empty() {
            return Err(Error::InvalidOption("fence must not be blank".to_string()));
        }
        tracing::debug!(
            link_style = %options.link_style,
            fence = %options.fence,
            bullet_list_marker = %options.bullet_list_marker,
            "loaded slack options"
        );
        Ok(options)
    }
}
