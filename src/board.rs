use crate::types::Position;

/// Dev slides at most this many squares along a ray.
const DEV_RANGE: i32 = 3;

/// Dev scan order: orthogonals first, then diagonals.
const DEV_DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const DES_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Wire code: 1 = white, 2 = black.
    pub fn code(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 2,
        }
    }
}

/// Piece kind. Capturing the opponent's PO ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Po,
    Dev,
    Des,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    pub fn new(color: Color, kind: Kind) -> Self {
        Self { color, kind }
    }

    /// Wire code: 1/2/3 = white PO/Dev/Des, 4/5/6 = black PO/Dev/Des.
    pub fn code(self) -> u8 {
        let kind = match self.kind {
            Kind::Po => 0,
            Kind::Dev => 1,
            Kind::Des => 2,
        };
        match self.color {
            Color::White => 1 + kind,
            Color::Black => 4 + kind,
        }
    }
}

/// Rectangular board of `rows x cols` cells, row-major.
///
/// Boards are cheap value snapshots: applying a move yields a new board
/// and leaves the source untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Creates a board with the standard starting placement:
    /// black PO/Dev/Des on row 0 at the last three columns (rightmost
    /// first), white PO/Dev/Des on the last row at columns 0..2.
    ///
    /// Pieces that do not fit on a narrow board are silently omitted.
    pub fn with_start_position(rows: usize, cols: usize) -> Self {
        let mut board = Self::empty(rows, cols);
        if rows == 0 {
            return board;
        }
        let kinds = [Kind::Po, Kind::Dev, Kind::Des];
        for (i, kind) in kinds.into_iter().enumerate() {
            if cols > i {
                let pos = Position::new(0, (cols - 1 - i) as u8);
                board.set(pos, Some(Piece::new(Color::Black, kind)));
            }
        }
        for (i, kind) in kinds.into_iter().enumerate() {
            if cols > i {
                let pos = Position::new((rows - 1) as u8, i as u8);
                board.set(pos, Some(Piece::new(Color::White, kind)));
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the piece at `pos`, or `None` for empty or out-of-range.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if (pos.row as usize) < self.rows && (pos.col as usize) < self.cols {
            self.cells[pos.row as usize * self.cols + pos.col as usize]
        } else {
            None
        }
    }

    /// Writes a cell. Out-of-range positions are ignored.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if (pos.row as usize) < self.rows && (pos.col as usize) < self.cols {
            self.cells[pos.row as usize * self.cols + pos.col as usize] = piece;
        }
    }

    /// Returns a new board with the piece at `from` moved onto `to`.
    /// Whatever occupied `to` is captured; `self` is left unchanged.
    pub fn apply(&self, from: Position, to: Position) -> Board {
        let mut next = self.clone();
        next.set(to, self.piece_at(from));
        next.set(from, None);
        next
    }

    /// Whether `color` still has its PO on the board. Full scan.
    pub fn has_po(&self, color: Color) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|p| p.kind == Kind::Po && p.color == color)
    }

    /// Converts the board to row-major cell codes (see `Piece::code`,
    /// 0 = empty).
    pub fn to_array(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, Piece::code))
            .collect()
    }

    /// Legal destinations for the piece at `from`, acting as `color`.
    ///
    /// Pure: consults only the grid, never turn or selection state. The
    /// caller guarantees `color` matches the piece's own color. Returns
    /// an empty set when `from` holds no piece.
    pub fn legal_moves(&self, from: Position, color: Color) -> Vec<Position> {
        match self.piece_at(from).map(|p| p.kind) {
            Some(Kind::Po) => self.po_moves(from, color),
            Some(Kind::Dev) => self.dev_moves(from, color),
            Some(Kind::Des) => self.des_moves(from, color),
            None => Vec::new(),
        }
    }

    /// PO steps to the 8 adjacent cells.
    fn po_moves(&self, from: Position, color: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        for dr in -1..=1i32 {
            for dc in -1..=1i32 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = from.row as i32 + dr;
                let col = from.col as i32 + dc;
                if self.can_land(row, col, color) {
                    moves.push(Position::new(row as u8, col as u8));
                }
            }
        }
        moves
    }

    /// Des jumps to the 8 knight offsets, ignoring intervening pieces.
    fn des_moves(&self, from: Position, color: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        for (dr, dc) in DES_OFFSETS {
            let row = from.row as i32 + dr;
            let col = from.col as i32 + dc;
            if self.can_land(row, col, color) {
                moves.push(Position::new(row as u8, col as u8));
            }
        }
        moves
    }

    /// Dev slides up to `DEV_RANGE` along each of the 8 directions:
    /// empty cells continue the ray, the first enemy is a capture that
    /// ends it, an own piece or the board edge ends it immediately.
    fn dev_moves(&self, from: Position, color: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        for (dr, dc) in DEV_DIRECTIONS {
            for dist in 1..=DEV_RANGE {
                let row = from.row as i32 + dr * dist;
                let col = from.col as i32 + dc * dist;
                if !self.in_bounds(row, col) {
                    break;
                }
                let pos = Position::new(row as u8, col as u8);
                match self.piece_at(pos) {
                    None => moves.push(pos),
                    Some(piece) if piece.color != color => {
                        moves.push(pos);
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
        moves
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        (0..self.rows as i32).contains(&row) && (0..self.cols as i32).contains(&col)
    }

    /// In bounds and not occupied by `color`'s own piece.
    fn can_land(&self, row: i32, col: i32, color: Color) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        match self.piece_at(Position::new(row as u8, col as u8)) {
            Some(piece) => piece.color != color,
            None => true,
        }
    }
}
