//! Replay/share codec - game state as a URL query parameter
//!
//! A shared game is a link whose `replay` query parameter holds a
//! percent-encoded JSON object with a closed schema:
//! `{"grid": [c0..c8], "turnFlag": bool}` where each cell is `"X"`, `"O"`,
//! or `null` and `turnFlag` may be absent (defaults to X to move).
//!
//! Decoding is strict about shape and silent about failure: anything that
//! does not match the schema exactly - malformed JSON, a missing or
//! wrong-length grid, non-cell values, a non-boolean turn flag - is logged
//! at debug level and the game starts fresh. Decoded data only ever becomes
//! a `Board` and a turn flag; it never selects what gets rendered or how.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameState};
use crate::types::{Cell, Player, CELL_COUNT};

/// Name of the query parameter carrying an encoded game state.
pub const REPLAY_PARAM: &str = "replay";

/// Default base for share links. A terminal app has no "current page", so
/// the base is configuration (`--base-url`).
pub const DEFAULT_BASE_URL: &str = "https://example.com/tictactoe";

/// Escape everything outside the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One cell on the wire: `"X"`, `"O"`, or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WireCell(Cell);

impl Serialize for WireCell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.0 {
            Some(player) => serializer.serialize_str(player.as_str()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for WireCell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;
        impl<'de> serde::de::Visitor<'de> for V {
            type Value = WireCell;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "\"X\", \"O\", or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Player::from_str(v)
                    .map(|player| WireCell(Some(player)))
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireCell(None))
            }
        }

        deserializer.deserialize_any(V)
    }
}

/// The complete wire schema. Unknown fields are ignored; nothing beyond
/// these two is ever read.
#[derive(Debug, Serialize, Deserialize)]
struct ReplayState {
    grid: [WireCell; CELL_COUNT],
    #[serde(rename = "turnFlag", default, skip_serializing_if = "Option::is_none")]
    turn_flag: Option<bool>,
}

/// Encode the current state as a percent-encoded parameter value.
pub fn encode_state(state: &GameState) -> String {
    let wire = ReplayState {
        grid: state.board().cells().map(WireCell),
        turn_flag: Some(state.x_is_next()),
    };
    let json = serde_json::to_string(&wire).expect("replay state serializes");
    utf8_percent_encode(&json, COMPONENT).to_string()
}

/// Build a full share link for the given base URL.
///
/// Any query or fragment already on the base is dropped.
pub fn share_url(base: &str, state: &GameState) -> String {
    let base = match base.find(['?', '#']) {
        Some(pos) => &base[..pos],
        None => base,
    };
    format!("{base}?{REPLAY_PARAM}={}", encode_state(state))
}

/// Extract the raw (still percent-encoded) `replay` value from a URL.
pub fn replay_param(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == REPLAY_PARAM {
            return Some(value);
        }
    }
    None
}

/// Decode a raw parameter value into a board and turn flag.
///
/// Returns `None` for anything that does not match the schema.
pub fn decode_param(raw: &str) -> Option<(Board, bool)> {
    let text = match percent_decode_str(raw).decode_utf8() {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "replay parameter is not valid UTF-8, ignoring");
            return None;
        }
    };

    let wire: ReplayState = match serde_json::from_str(&text) {
        Ok(wire) => wire,
        Err(err) => {
            debug!(%err, "replay parameter does not match the schema, ignoring");
            return None;
        }
    };

    let cells = wire.grid.map(|WireCell(cell)| cell);
    Some((Board::from_cells(cells), wire.turn_flag.unwrap_or(true)))
}

/// Build the initial game state from an optional `--replay` argument.
///
/// The argument may be a full share URL or a bare parameter value.
/// Missing or malformed input falls back to a fresh game; there is no
/// user-visible error path.
pub fn initial_state(arg: Option<&str>) -> GameState {
    let Some(raw) = arg else {
        return GameState::new();
    };

    let param = if raw.contains('?') {
        match replay_param(raw) {
            Some(param) => param,
            None => {
                debug!("no replay parameter in URL, starting fresh");
                return GameState::new();
            }
        }
    } else {
        raw
    };

    match decode_param(param) {
        Some((board, x_is_next)) => {
            debug!(x_is_next, "restored game state from replay parameter");
            GameState::from_replay(board, x_is_next)
        }
        None => GameState::new(),
    }
}
