//! Protocol module - line-delimited JSON requests and responses
//!
//! Every request is one JSON object with a `type` field and an optional
//! `seq` that is echoed back. Every response is one JSON object with a
//! `status` of `ok` or `error`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameSnapshot, MoveOutcome, SavedGame};
use crate::types::Move;

// ============== Controller -> Session ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Deal a new game. `seed` is digits or any text; `draw` is 1 or 3.
    NewGame {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        draw: Option<u8>,
    },
    Move {
        #[serde(rename = "move")]
        mv: Move,
    },
    Undo,
    Redo,
    LegalMoves,
    Hint,
    Autoplay,
    State,
    Save,
    Load {
        game: SavedGame,
    },
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::NewGame { .. } => "new_game",
            Request::Move { .. } => "move",
            Request::Undo => "undo",
            Request::Redo => "redo",
            Request::LegalMoves => "legal_moves",
            Request::Hint => "hint",
            Request::Autoplay => "autoplay",
            Request::State => "state",
            Request::Save => "save",
            Request::Load { .. } => "load",
        }
    }
}

/// A request with its sequence number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub seq: u64,
    #[serde(flatten)]
    pub request: Request,
}

// ============== Session -> Controller ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok(Reply),
    Error(ErrorReply),
}

impl Response {
    pub fn seq(&self) -> u64 {
        match self {
            Response::Ok(reply) => reply.seq,
            Response::Error(err) => err.seq,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }
}

/// Successful reply; only the fields relevant to the request are present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub seq: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GameSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MoveOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<Move>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<Move>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplayed: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<SavedGame>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub seq: u64,
    pub code: String,
    pub message: String,
}

/// Request-level failures that never reach the engine
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed request: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("draw count must be 1 or 3, got {0}")]
    DrawMode(u8),
}

impl ProtocolError {
    pub fn code(&self) -> &'static str {
        match self {
            ProtocolError::Parse(_) => "invalid_request",
            ProtocolError::DrawMode(_) => "invalid_draw_mode",
        }
    }
}

// ============== Message Parsing ==============

/// Parse one request line
///
/// On failure the `seq` is still recovered when the line is a JSON object
/// carrying one, so the error reply can be matched to its request.
pub fn parse_request(line: &str) -> Result<Envelope, (u64, ProtocolError)> {
    serde_json::from_str::<Envelope>(line).map_err(|err| {
        #[derive(Deserialize)]
        struct SeqOnly {
            seq: Option<u64>,
        }
        let seq = serde_json::from_str::<SeqOnly>(line)
            .ok()
            .and_then(|s| s.seq)
            .unwrap_or(0);
        (seq, ProtocolError::Parse(err))
    })
}

pub fn create_error(seq: u64, code: &str, message: impl Into<String>) -> Response {
    Response::Error(ErrorReply {
        seq,
        code: code.to_string(),
        message: message.into(),
    })
}
