//! Undo/redo history of whole-board snapshots

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{RedoError, UndoError};

/// Snapshot stacks behind undo and redo
///
/// `undo` holds the board as it was before each applied move, oldest first.
/// `redo` is filled only by undos and emptied by any new move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<Board>,
    redo: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_stacks(undo: Vec<Board>, redo: Vec<Board>) -> Self {
        Self { undo, redo }
    }

    /// Remember `before` as the position preceding a new move
    pub fn record(&mut self, before: Board) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Step `board` back one move
    pub fn undo(&mut self, board: &mut Board) -> Result<(), UndoError> {
        let mut previous = self.undo.pop().ok_or(UndoError::NoHistory)?;
        previous.refresh_won();
        self.redo.push(std::mem::replace(board, previous));
        Ok(())
    }

    /// Re-apply the most recently undone move
    pub fn redo(&mut self, board: &mut Board) -> Result<(), RedoError> {
        let mut next = self.redo.pop().ok_or(RedoError::NothingToRedo)?;
        next.refresh_won();
        self.undo.push(std::mem::replace(board, next));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Every stored snapshot, undo stack first
    pub fn snapshots(&self) -> impl Iterator<Item = &Board> + '_ {
        self.undo.iter().chain(self.redo.iter())
    }
}
