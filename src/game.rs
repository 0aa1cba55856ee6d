use crate::board::{Board, Color};
use crate::types::{GameState, Position};

const MSG_SELECT_OWN: &str = "Select one of your own pieces.";
const MSG_SELECT_DESTINATION: &str = "Select a destination.";
const MSG_NO_VALID_MOVES: &str = "No valid moves.";
const MSG_INVALID_DESTINATION: &str = "Select a valid destination.";
const MSG_WHITE_WON: &str = "White pieces won!";
const MSG_BLACK_WON: &str = "Black pieces won!";

/// Turn and selection state machine for one match.
///
/// A cell click is two-phase: the first accepted click selects one of
/// the mover's pieces and computes its legal destinations, the second
/// either lands on one of them and completes the move or is rejected.
/// Rejections never change state; they only update the status message.
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Position>,
    legal_moves: Vec<Position>,
    winner: Option<Color>,
    message: String,
}

impl Game {
    /// Starts a match on the supplied initial board, white to move.
    /// The board's size and placement are the setup collaborator's
    /// responsibility; they are not validated here.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            turn: Color::White,
            selected: None,
            legal_moves: Vec::new(),
            winner: None,
            message: String::new(),
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn legal_moves(&self) -> &[Position] {
        &self.legal_moves
    }

    /// Handles a cell click. Returns `true` when the click was accepted
    /// (a piece got selected or a move completed), `false` when it was
    /// rejected or the game is already over.
    pub fn select_cell(&mut self, pos: Position) -> bool {
        if self.winner.is_some() {
            return false;
        }
        match self.selected {
            None => self.try_select(pos),
            Some(from) => self.try_move(from, pos),
        }
    }

    /// Cancels a pending destination pick. Rejected in any other state.
    pub fn cancel_selection(&mut self) -> bool {
        if self.winner.is_some() || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        self.legal_moves.clear();
        self.message.clear();
        true
    }

    /// Resets to the supplied initial board, white to move, no
    /// selection, no winner. Valid in any state, including game over.
    pub fn restart(&mut self, board: Board) {
        self.board = board;
        self.turn = Color::White;
        self.selected = None;
        self.legal_moves.clear();
        self.winner = None;
        self.message.clear();
    }

    fn try_select(&mut self, pos: Position) -> bool {
        let piece = match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.turn => piece,
            _ => {
                self.message = MSG_SELECT_OWN.to_string();
                return false;
            }
        };
        let moves = self.board.legal_moves(pos, piece.color);
        self.message = if moves.is_empty() {
            // Stay selected with an empty set; only cancel gets out.
            MSG_NO_VALID_MOVES.to_string()
        } else {
            MSG_SELECT_DESTINATION.to_string()
        };
        self.selected = Some(pos);
        self.legal_moves = moves;
        true
    }

    fn try_move(&mut self, from: Position, to: Position) -> bool {
        if !self.legal_moves.contains(&to) {
            self.message = MSG_INVALID_DESTINATION.to_string();
            return false;
        }
        let next = self.board.apply(from, to);
        let opponent = self.turn.opponent();

        self.board = next;
        self.selected = None;
        self.legal_moves.clear();

        if !self.board.has_po(opponent) {
            self.winner = Some(self.turn);
            self.message = match self.turn {
                Color::White => MSG_WHITE_WON,
                Color::Black => MSG_BLACK_WON,
            }
            .to_string();
        } else {
            self.turn = opponent;
            self.message.clear();
        }
        true
    }

    /// Snapshot for the presentation collaborator.
    pub fn to_game_state(&self) -> GameState {
        GameState {
            rows: self.board.rows() as u8,
            cols: self.board.cols() as u8,
            board: self.board.to_array(),
            turn: self.turn.code(),
            selected: self.selected,
            legal_moves: self.legal_moves.clone(),
            winner: self.winner.map_or(0, Color::code),
            message: self.message.clone(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.selected = None;
        self.legal_moves.clear();
        self.winner = None;
        self.message.clear();
    }
}
