//! Shared difficulty levels.

use serde::{Deserialize, Serialize};

/// Difficulty picked before a game starts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Small maze, random bot.
    #[default]
    Easy,
    /// Medium maze, win-or-block bot that sometimes slips.
    Medium,
    /// Large maze, unbeatable bot.
    Hard,
}
