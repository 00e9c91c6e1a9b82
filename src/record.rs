use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sample game shipped with the binary, used when no record path is configured
pub const SAMPLE_GAME: &str = include_str!("../assets/sample_game.json");

/// Why a game record could not be turned into a viewable game
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("game record is missing")]
    Missing,
    #[error("game record has no move list")]
    NoMoves,
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("game record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Player {
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

/// One ply of the recorded game together with the position it produced
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub move_number: u32,
    pub color: Side,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub san: String,
    pub from: String,
    pub to: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub promotion: String,
    pub fen_after: String,
}

/// Optional text fields may be absent, `null`, or empty; all read as `""`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Move {
    /// SAN when recorded, otherwise the `from-to` squares
    #[must_use]
    pub fn notation(&self) -> String {
        if self.san.is_empty() {
            format!("{}-{}", self.from, self.to)
        } else {
            self.san.clone()
        }
    }

    /// Row label shown in the move list, e.g. `3. White Qh5`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.prefix(), self.notation())
    }

    /// The `3. White` part of the label
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{}. {}", self.move_number, self.color.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub url: String,
    pub white_player: Player,
    pub black_player: Player,
    pub result: String,
    pub eco_code: String,
    pub moves: Vec<Move>,
}

/// Wire shape of a record, before the move list has been checked for presence
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    #[serde(default)]
    id: String,
    #[serde(default)]
    url: String,
    white_player: Player,
    black_player: Player,
    result: String,
    #[serde(default)]
    eco_code: String,
    moves: Option<Vec<Move>>,
}

impl Game {
    /// Parses a JSON record. `null` counts as an absent record.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let raw: Option<RawGame> = serde_json::from_str(text)?;
        let raw = raw.ok_or(RecordError::Missing)?;
        let moves = raw.moves.ok_or(RecordError::NoMoves)?;
        Ok(Self {
            id: raw.id,
            url: raw.url,
            white_player: raw.white_player,
            black_player: raw.black_player,
            result: raw.result,
            eco_code: raw.eco_code,
            moves,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, RecordError> {
        let text = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads from `path` when given, otherwise from the embedded sample
    pub fn load(path: Option<&Path>) -> Result<Self, RecordError> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading game record");
                Self::from_path(path)
            }
            None => {
                tracing::info!("loading embedded sample game");
                Self::from_json(SAMPLE_GAME)
            }
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} vs {}",
            self.white_player.username, self.black_player.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT_GAME: &str = r#"{
        "id": "g1",
        "url": "https://example.org/g1",
        "whitePlayer": { "username": "alice" },
        "blackPlayer": { "username": "bob" },
        "result": "1-0",
        "ecoCode": "C20",
        "moves": [
            {
                "moveNumber": 1,
                "color": "WHITE",
                "san": "e4",
                "from": "e2",
                "to": "e4",
                "promotion": "",
                "fenAfter": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
            }
        ]
    }"#;

    #[test]
    fn test_parses_camel_case_record() {
        let game = Game::from_json(SHORT_GAME).unwrap();
        assert_eq!(game.title(), "alice vs bob");
        assert_eq!(game.eco_code, "C20");
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.moves[0].color, Side::White);
        assert_eq!(game.moves[0].label(), "1. White e4");
    }

    #[test]
    fn test_null_record_is_missing() {
        assert!(matches!(Game::from_json("null"), Err(RecordError::Missing)));
    }

    #[test]
    fn test_record_without_moves() {
        let text = r#"{
            "whitePlayer": { "username": "a" },
            "blackPlayer": { "username": "b" },
            "result": "*"
        }"#;
        assert!(matches!(Game::from_json(text), Err(RecordError::NoMoves)));
    }

    #[test]
    fn test_empty_move_list_is_valid() {
        let text = r#"{
            "whitePlayer": { "username": "a" },
            "blackPlayer": { "username": "b" },
            "result": "*",
            "moves": []
        }"#;
        let game = Game::from_json(text).unwrap();
        assert!(game.moves.is_empty());
        assert!(game.id.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Game::from_json("{ not json"),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Game::from_path(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(RecordError::Io { .. })));
    }

    #[test]
    fn test_label_falls_back_to_squares() {
        let mv = Move {
            move_number: 1,
            color: Side::White,
            san: String::new(),
            from: "e2".to_string(),
            to: "e4".to_string(),
            promotion: String::new(),
            fen_after: String::new(),
        };
        assert_eq!(mv.notation(), "e2-e4");
        assert_eq!(mv.label(), "1. White e2-e4");
    }

    fn record_with_move(fields: &str) -> String {
        format!(
            r#"{{
                "whitePlayer": {{ "username": "a" }},
                "blackPlayer": {{ "username": "b" }},
                "result": "*",
                "moves": [{{
                    "moveNumber": 1,
                    "color": "WHITE",
                    "from": "e2",
                    "to": "e4",
                    "fenAfter": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
                    {}
                }}]
            }}"#,
            fields
        )
    }

    #[test]
    fn test_null_promotion_is_accepted() {
        let game = Game::from_json(&record_with_move(r#", "san": "e4", "promotion": null"#))
            .unwrap();
        assert_eq!(game.moves[0].promotion, "");
        assert_eq!(game.moves[0].label(), "1. White e4");
    }

    #[test]
    fn test_missing_san_uses_squares() {
        let game = Game::from_json(&record_with_move("")).unwrap();
        assert_eq!(game.moves[0].label(), "1. White e2-e4");
    }

    #[test]
    fn test_null_san_uses_squares() {
        let game = Game::from_json(&record_with_move(r#", "san": null"#)).unwrap();
        assert_eq!(game.moves[0].notation(), "e2-e4");
    }

    #[test]
    fn test_embedded_sample_loads() {
        let game = Game::load(None).unwrap();
        assert!(!game.moves.is_empty());
        assert_eq!(game.moves[0].move_number, 1);
    }
}
