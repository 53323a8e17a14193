use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

pub const LABEL_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "❤️")]
    Heart,
    #[serde(rename = "😃")]
    Smiley,
    #[serde(rename = "😍")]
    HeartEyes,
    #[serde(rename = "😵")]
    Dizzy,
    #[serde(rename = "👍")]
    ThumbsUp,
}

pub fn label_order() -> &'static [Label; LABEL_COUNT] {
    &[
        Label::Heart,
        Label::Smiley,
        Label::HeartEyes,
        Label::Dizzy,
        Label::ThumbsUp,
    ]
}

impl Label {
    pub fn glyph(self) -> &'static str {
        match self {
            Label::Heart => "❤️",
            Label::Smiley => "😃",
            Label::HeartEyes => "😍",
            Label::Dizzy => "😵",
            Label::ThumbsUp => "👍",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Label::Heart => "heart",
            Label::Smiley => "smiley",
            Label::HeartEyes => "heart_eyes",
            Label::Dizzy => "dizzy",
            Label::ThumbsUp => "thumbs_up",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Label {
    type Err = ScoreError;

    /// Accepts the emoji glyph or the ASCII id. The heart is also accepted
    /// without its variation selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "\u{2764}" {
            return Ok(Label::Heart);
        }
        label_order()
            .iter()
            .copied()
            .find(|label| label.glyph() == s || label.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScoreError::UnknownLabel(s.to_string()))
    }
}

/// Label order matching the classifier's output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSet {
    labels: [Label; LABEL_COUNT],
}

impl LabelSet {
    pub fn new(labels: [Label; LABEL_COUNT]) -> Result<Self, ScoreError> {
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(ScoreError::DuplicateLabel(label.glyph().to_string()));
            }
        }
        Ok(Self { labels })
    }

    pub fn default_v1() -> Self {
        Self {
            labels: *label_order(),
        }
    }

    pub fn parse(symbols: &[&str]) -> Result<Self, ScoreError> {
        if symbols.len() != LABEL_COUNT {
            return Err(ScoreError::InvalidInput {
                probabilities: LABEL_COUNT,
                labels: symbols.len(),
            });
        }
        let mut labels = *label_order();
        for (slot, symbol) in labels.iter_mut().zip(symbols) {
            *slot = symbol.parse()?;
        }
        Self::new(labels)
    }

    pub fn labels(&self) -> &[Label; LABEL_COUNT] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    pub fn position(&self, label: Label) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// One model output vector, index-aligned with a [`LabelSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probabilities(pub [f32; LABEL_COUNT]);

impl Probabilities {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl TryFrom<&[f32]> for Probabilities {
    type Error = ScoreError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; LABEL_COUNT] =
            values.try_into().map_err(|_| ScoreError::InvalidInput {
                probabilities: values.len(),
                labels: LABEL_COUNT,
            })?;
        Ok(Self(array))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/labels.rs"]
mod tests;
