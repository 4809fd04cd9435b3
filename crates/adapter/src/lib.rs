//! Adapter module - drive a game through line-delimited JSON
//!
//! A controller (a front end, a bot, a test harness) writes one request per
//! line and reads one response per line. The session runs over any
//! `BufRead`/`Write` pair; the `klondike` binary wires it to stdin/stdout.
//!
//! # Requests
//!
//! - **new_game**: deal again, optionally with `seed` and `draw`
//! - **move**: apply a move (`{"kind": ..., "card": ..., "source": ...}`)
//! - **undo** / **redo**: step through history
//! - **legal_moves**: list every legal move
//! - **hint**: the best ranked move
//! - **autoplay**: play safe foundation moves
//! - **state**: the masked board view
//! - **save** / **load**: export or import a saved game
//!
//! # Environment Variables
//!
//! - `KLONDIKE_DRAW`: 1 or 3 (default 1)
//! - `KLONDIKE_SEED`: first deal seed (default random)
//! - `KLONDIKE_RECYCLE_LIMIT`: waste recycles allowed (default unlimited)
//! - `KLONDIKE_REVERSE_MOVES`: allow foundation to tableau (default on)
//! - `KLONDIKE_AUTOPLAY`: safe autoplay after each move (default off)
//!
//! # Example Exchange
//!
//! ```text
//! -> {"type":"move","seq":1,"move":{"kind":"draw","source":{"pile":"stock"}}}
//! <- {"status":"ok","seq":1,"state":{...},"outcome":{...}}
//! -> {"type":"undo","seq":2}
//! <- {"status":"ok","seq":2,"state":{...}}
//! -> {"type":"redo","seq":3}
//! <- {"status":"ok","seq":3,"state":{...}}
//! -> {"type":"redo","seq":4}
//! <- {"status":"error","seq":4,"code":"nothing_to_redo","message":"nothing to redo"}
//! ```

pub mod config;
pub mod protocol;
pub mod session;

pub use klondike_core as core;
pub use klondike_engine as engine;
pub use klondike_types as types;

pub use config::SessionConfig;
pub use protocol::{parse_request, Envelope, ProtocolError, Reply, Request, Response};
pub use session::Session;
