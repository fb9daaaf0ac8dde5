//! Tests for difficulty presets and TOML overrides.

use playroom::{Difficulty, PlayroomConfig};
use playroom_maze::MazeSettings;
use playroom_tictactoe::{Player, Strategy};
use std::io::Write;

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = PlayroomConfig::from_toml(
        r#"
        [maze.easy]
        size = 11
        collectibles = 4

        [tictactoe.medium]
        strategy = "heuristic"
        accuracy = 0.5
        "#,
    )
    .unwrap();

    assert_eq!(config.maze_for(Difficulty::Easy), MazeSettings::new(11, 4));
    assert_eq!(config.maze_for(Difficulty::Medium), MazeSettings::new(13, 5));
    assert_eq!(*config.bot_for(Difficulty::Medium).accuracy(), 0.5);
    assert_eq!(*config.bot_for(Difficulty::Hard).strategy(), Strategy::Optimal);
}

#[test]
fn test_partial_section_keeps_preset_fields() {
    let config = PlayroomConfig::from_toml(
        r#"
        [maze.hard]
        size = 21

        [tictactoe.easy]
        strategy = "optimal"

        [tictactoe.medium]
        strategy = "heuristic"
        "#,
    )
    .unwrap();

    assert_eq!(config.maze_for(Difficulty::Hard), MazeSettings::new(21, 7));

    let easy = config.bot_for(Difficulty::Easy).bot(Player::O);
    assert_eq!(easy.strategy(), Strategy::Optimal);
    assert_eq!(easy.accuracy(), 1.0);
    assert_eq!(easy.mark(), Player::O);

    let medium = config.bot_for(Difficulty::Medium);
    assert_eq!(*medium.strategy(), Strategy::Heuristic);
    assert_eq!(*medium.accuracy(), 0.7);
}

#[test]
fn test_unknown_field_rejected() {
    let result = PlayroomConfig::from_toml(
        r#"
        [tictactoe.medium]
        acuracy = 0.5
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_nan_accuracy_rejected() {
    let err = PlayroomConfig::from_toml(
        r#"
        [tictactoe.hard]
        accuracy = nan
        "#,
    )
    .unwrap_err();
    assert!(err.message.contains("tictactoe.hard"), "{}", err);
}

#[test]
fn test_even_maze_size_rejected() {
    let err = PlayroomConfig::from_toml(
        r#"
        [maze.hard]
        size = 8
        collectibles = 1
        "#,
    )
    .unwrap_err();
    assert!(err.message.contains("maze.hard"), "{}", err);
}

#[test]
fn test_accuracy_out_of_range_rejected() {
    let err = PlayroomConfig::from_toml(
        r#"
        [tictactoe.medium]
        strategy = "heuristic"
        accuracy = 1.5
        "#,
    )
    .unwrap_err();
    assert!(err.message.contains("accuracy"), "{}", err);
}

#[test]
fn test_unknown_strategy_rejected() {
    let result = PlayroomConfig::from_toml(
        r#"
        [tictactoe.hard]
        strategy = "genius"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[maze.medium]\nsize = 15\ncollectibles = 6").unwrap();

    let config = PlayroomConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.maze_for(Difficulty::Medium), MazeSettings::new(15, 6));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = PlayroomConfig::from_file("/nonexistent/playroom.toml").unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_no_path_means_defaults() {
    let config = PlayroomConfig::load(None).unwrap();
    assert_eq!(config, PlayroomConfig::default());
}

#[test]
fn test_difficulty_names() {
    assert_eq!(Difficulty::Hard.to_string(), "hard");
    assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
}
