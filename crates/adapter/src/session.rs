//! Session module - one game driven by protocol requests
//!
//! The session is synchronous: each request line is handled to completion
//! and answered with exactly one response line before the next is read.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::core::{Game, Seed};
use crate::engine::{autoplay, best_hint};
use crate::protocol::{create_error, parse_request, Envelope, ProtocolError, Reply, Request, Response};
use crate::types::DrawMode;

pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let game = Game::new(config.seed, config.rules);
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn state_reply(&self, seq: u64) -> Reply {
        Reply {
            seq,
            state: Some(self.game.snapshot()),
            ..Reply::default()
        }
    }

    fn run_autoplay(&mut self) -> Option<usize> {
        self.config.autoplay.then(|| autoplay(&mut self.game))
    }

    /// Parse and handle one request line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match parse_request(line) {
            Ok(envelope) => self.handle(envelope),
            Err((seq, err)) => {
                warn!(seq, error = %err, "rejected request");
                create_error(seq, err.code(), err.to_string())
            }
        }
    }

    pub fn handle(&mut self, envelope: Envelope) -> Response {
        let Envelope { seq, request } = envelope;
        let name = request.name();
        let response = self.dispatch(seq, request);
        match &response {
            Response::Ok(_) => debug!(seq, request = name, "handled request"),
            Response::Error(err) => {
                warn!(seq, request = name, code = %err.code, "request failed")
            }
        }
        response
    }

    fn dispatch(&mut self, seq: u64, request: Request) -> Response {
        match request {
            Request::NewGame { seed, draw } => {
                let mut rules = *self.game.board().rules();
                if let Some(count) = draw {
                    let Some(mode) = DrawMode::from_count(count) else {
                        let err = ProtocolError::DrawMode(count);
                        return create_error(seq, err.code(), err.to_string());
                    };
                    rules.draw_mode = mode;
                }
                let seed = seed.as_deref().and_then(Seed::parse);
                self.game = Game::new(seed, rules);
                info!(seq, seed = ?self.game.board().seed(), "session dealt new game");
                let autoplayed = self.run_autoplay();
                Response::Ok(Reply {
                    autoplayed,
                    ..self.state_reply(seq)
                })
            }
            Request::Move { mv } => match self.game.apply_move(&mv) {
                Ok(outcome) => {
                    let autoplayed = self.run_autoplay();
                    Response::Ok(Reply {
                        outcome: Some(outcome),
                        autoplayed,
                        ..self.state_reply(seq)
                    })
                }
                Err(err) => create_error(seq, err.code(), err.to_string()),
            },
            Request::Undo => match self.game.undo() {
                Ok(()) => Response::Ok(self.state_reply(seq)),
                Err(err) => create_error(seq, err.code(), err.to_string()),
            },
            Request::Redo => match self.game.redo() {
                Ok(()) => Response::Ok(self.state_reply(seq)),
                Err(err) => create_error(seq, err.code(), err.to_string()),
            },
            Request::LegalMoves => Response::Ok(Reply {
                seq,
                moves: Some(self.game.legal_moves().to_vec()),
                ..Reply::default()
            }),
            Request::Hint => Response::Ok(Reply {
                seq,
                hint: best_hint(self.game.board()),
                ..Reply::default()
            }),
            Request::Autoplay => {
                let played = autoplay(&mut self.game);
                Response::Ok(Reply {
                    autoplayed: Some(played),
                    ..self.state_reply(seq)
                })
            }
            Request::State => Response::Ok(self.state_reply(seq)),
            Request::Save => Response::Ok(Reply {
                seq,
                game: Some(self.game.save()),
                ..Reply::default()
            }),
            Request::Load { game } => match Game::restore(game) {
                Ok(game) => {
                    self.game = game;
                    Response::Ok(self.state_reply(seq))
                }
                Err(err) => create_error(seq, err.code(), err.to_string()),
            },
        }
    }

    /// Serve requests line by line until `input` is exhausted
    ///
    /// Blank lines are skipped. Each response is flushed before the next
    /// request is read.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line);
            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }
}
