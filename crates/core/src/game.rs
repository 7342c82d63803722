//! Game module - the command dispatcher
//!
//! [`Game`] owns the board, the falling piece, and the shape provider, and
//! applies one [`Command`] at a time. A downward move that hits the floor or
//! the stack locks the piece into the board and spawns the next one. A spawn
//! that collides ends the game.

use log::{debug, info};

use crate::board::Board;
use crate::collision::Collision;
use crate::piece::Piece;
use crate::render::Renderer;
use crate::rng::{ShapeSource, UniformShapes};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, SPAWN_X, SPAWN_Y};

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The freshly spawned piece overlaps the stack
    SpawnBlocked,
    /// The piece landed with squares still above row 0
    LockedAboveBoard,
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The piece moved or rotated
    Moved,
    /// The transition was rejected; nothing changed
    Blocked(Collision),
    /// The piece locked and the next one spawned
    Locked { rows_cleared: u8 },
    /// The session ended on this command
    GameOver(GameOverReason),
    /// Board cleared and a new piece spawned
    Restarted,
    /// Command arrived after game over
    Ignored,
}

impl Outcome {
    /// Whether the command changed anything a renderer would show
    pub fn changed_state(&self) -> bool {
        !matches!(self, Outcome::Blocked(_) | Outcome::Ignored)
    }

    pub fn locked(&self) -> bool {
        matches!(self, Outcome::Locked { .. })
    }
}

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Anchor column for new pieces
    pub spawn_x: i8,
    /// Anchor row for new pieces (negative spawns above the board)
    pub spawn_y: i8,
    /// Remove full rows after each lock
    pub clear_full_rows: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            clear_full_rows: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<S = UniformShapes> {
    board: Board,
    active: Piece,
    shapes: S,
    options: GameOptions,
    status: GameStatus,
    pieces_locked: u32,
    rows_cleared: u32,
}

impl Game<UniformShapes> {
    /// Uniform random kinds from `seed`, default options
    pub fn seeded(seed: u32) -> Self {
        Self::new(UniformShapes::new(seed))
    }
}

impl<S: ShapeSource> Game<S> {
    /// Start a session on an empty board with default options
    pub fn new(shapes: S) -> Self {
        Self::with_options(shapes, GameOptions::default())
    }

    pub fn with_options(shapes: S, options: GameOptions) -> Self {
        Self::with_board(shapes, options, Board::new())
    }

    /// Start a session from an existing stack
    pub fn with_board(mut shapes: S, options: GameOptions, board: Board) -> Self {
        let first = Piece::at(shapes.next_kind(), options.spawn_x, options.spawn_y);
        let mut game = Self {
            board,
            active: first,
            shapes,
            options,
            status: GameStatus::Playing,
            pieces_locked: 0,
            rows_cleared: 0,
        };
        if !game.active.collision(&game.board).is_none() {
            info!("game over at start: spawn blocked");
            game.status = GameStatus::GameOver;
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) -> Outcome {
        if self.status == GameStatus::GameOver {
            return match command {
                Command::Restart => self.restart(),
                _ => Outcome::Ignored,
            };
        }

        match command {
            Command::MoveLeft => Self::transition(self.active.move_left(&self.board)),
            Command::MoveRight => Self::transition(self.active.move_right(&self.board)),
            Command::Rotate => Self::transition(self.active.rotate(&self.board)),
            Command::MoveDown | Command::Tick => self.descend(),
            Command::Restart => self.restart(),
        }
    }

    /// Apply a command and hand the new state to `renderer` if anything changed.
    pub fn dispatch<R: Renderer + ?Sized>(
        &mut self,
        command: Command,
        renderer: &mut R,
    ) -> Result<Outcome, R::Error> {
        let outcome = self.apply(command);
        if outcome.changed_state() {
            renderer.render(&self.snapshot())?;
        }
        Ok(outcome)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = Some(ActiveSnapshot::from(self.active));
        out.status = self.status;
        out.pieces_locked = self.pieces_locked;
        out.rows_cleared = self.rows_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn transition(collision: Collision) -> Outcome {
        if collision.is_none() {
            Outcome::Moved
        } else {
            Outcome::Blocked(collision)
        }
    }

    fn descend(&mut self) -> Outcome {
        let collision = self.active.move_down(&self.board);
        if collision.blocks_descent() {
            self.lock_and_spawn()
        } else {
            Self::transition(collision)
        }
    }

    fn lock_and_spawn(&mut self) -> Outcome {
        let piece = self.active;
        if piece.is_above_board() {
            info!("game over: {:?} locked above the board at ({}, {})", piece.kind, piece.x, piece.y);
            self.status = GameStatus::GameOver;
            return Outcome::GameOver(GameOverReason::LockedAboveBoard);
        }

        self.board.commit(piece.frame(), piece.x, piece.y, piece.color);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let rows_cleared = if self.options.clear_full_rows {
            self.board.clear_full_rows().len() as u8
        } else {
            0
        };
        self.rows_cleared += rows_cleared as u32;
        debug!(
            "locked {:?} {:?} at ({}, {}), {} rows cleared",
            piece.kind, piece.rotation, piece.x, piece.y, rows_cleared
        );

        if self.spawn_piece() {
            Outcome::Locked { rows_cleared }
        } else {
            Outcome::GameOver(GameOverReason::SpawnBlocked)
        }
    }

    /// Replace the active piece with the next kind at the spawn anchor.
    ///
    /// Returns false (and ends the session) when the new piece collides.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.shapes.next_kind();
        self.active = Piece::at(kind, self.options.spawn_x, self.options.spawn_y);

        let collision = self.active.collision(&self.board);
        if !collision.is_none() {
            info!("game over: {kind:?} spawn blocked ({collision:?})");
            self.status = GameStatus::GameOver;
            return false;
        }

        debug!("spawned {kind:?}");
        true
    }

    fn restart(&mut self) -> Outcome {
        info!("restart after {} pieces", self.pieces_locked);
        self.board.clear();
        self.status = GameStatus::Playing;
        self.pieces_locked = 0;
        self.rows_cleared = 0;

        if self.spawn_piece() {
            Outcome::Restarted
        } else {
            Outcome::GameOver(GameOverReason::SpawnBlocked)
        }
    }
}

impl Default for Game<UniformShapes> {
    fn default() -> Self {
        Self::seeded(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedShapes;
    use crate::types::{Cell, ColorId, Rotation, TetrominoKind};

    fn game_of(kinds: &str) -> Game<ScriptedShapes> {
        Game::new(ScriptedShapes::parse(kinds).unwrap())
    }

    #[test]
    fn test_new_game_spawns_first_piece() {
        let game = game_of("T");
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.active().kind, TetrominoKind::T);
        assert_eq!((game.active().x, game.active().y), (SPAWN_X, SPAWN_Y));
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_blocked_moves_are_not_errors() {
        let mut game = game_of("O");
        for _ in 0..10 {
            game.apply(Command::MoveLeft);
        }
        // O squares start at column x+1; column 0 is reached at x=-1.
        assert_eq!(game.active().x, -1);
        assert_eq!(
            game.apply(Command::MoveLeft),
            Outcome::Blocked(Collision::SideBoundary)
        );
        assert_eq!(game.active().x, -1);
    }

    #[test]
    fn test_tick_and_move_down_are_equivalent() {
        let mut a = game_of("L");
        let mut b = game_of("L");
        for _ in 0..30 {
            assert_eq!(a.apply(Command::Tick), b.apply(Command::MoveDown));
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.active(), b.active());
    }

    #[test]
    fn test_lock_spawns_next_from_source() {
        let mut game = game_of("OT");
        let mut outcome = Outcome::Moved;
        while outcome == Outcome::Moved {
            outcome = game.apply(Command::MoveDown);
        }
        assert_eq!(outcome, Outcome::Locked { rows_cleared: 0 });
        assert_eq!(game.pieces_locked(), 1);
        assert_eq!(game.active().kind, TetrominoKind::T);
        assert_eq!(game.active().rotation, Rotation::North);
        assert_eq!(game.board().occupied_count(), 4);
    }

    #[test]
    fn test_spawn_blocked_is_game_over() {
        let mut board = Board::new();
        // I spawn frame covers column 5, rows -2..=1.
        board.set(5, 1, Cell::Occupied(ColorId::Red));
        let game = Game::with_board(
            ScriptedShapes::repeat(TetrominoKind::I),
            GameOptions::default(),
            board,
        );
        assert!(game.is_game_over());
    }

    #[test]
    fn test_spawn_far_off_the_board_is_game_over() {
        let options = GameOptions {
            spawn_x: 126,
            ..GameOptions::default()
        };
        let mut game = Game::with_options(ScriptedShapes::repeat(TetrominoKind::T), options);
        assert!(game.is_game_over());
        assert_eq!(game.apply(Command::Restart), Outcome::GameOver(GameOverReason::SpawnBlocked));
    }

    #[test]
    fn test_game_over_ignores_commands_until_restart() {
        let mut board = Board::new();
        board.set(5, 1, Cell::Occupied(ColorId::Red));
        let mut game = Game::with_board(
            ScriptedShapes::repeat(TetrominoKind::I),
            GameOptions::default(),
            board,
        );

        let before = game.snapshot();
        for command in [Command::MoveLeft, Command::Rotate, Command::Tick, Command::MoveDown] {
            assert_eq!(game.apply(command), Outcome::Ignored);
        }
        assert_eq!(game.snapshot(), before);

        assert_eq!(game.apply(Command::Restart), Outcome::Restarted);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_lock_above_board_ends_game() {
        let mut board = Board::new();
        // Stack top at row 1 in column 5: the I lands with squares at rows -3..=0.
        board.set(5, 1, Cell::Occupied(ColorId::Red));
        let options = GameOptions {
            spawn_y: -3,
            ..GameOptions::default()
        };
        let mut game = Game::with_board(ScriptedShapes::repeat(TetrominoKind::I), options, board);
        assert_eq!(game.status(), GameStatus::Playing);

        assert_eq!(
            game.apply(Command::MoveDown),
            Outcome::GameOver(GameOverReason::LockedAboveBoard)
        );
        assert!(game.is_game_over());
        assert_eq!(game.board().occupied_count(), 1);
    }

    #[test]
    fn test_clear_full_rows_option() {
        let mut board = Board::new();
        for x in 0..10 {
            if x != 4 {
                board.set(x, 19, Cell::Occupied(ColorId::Blue));
            }
        }
        let options = GameOptions {
            spawn_x: 3,
            clear_full_rows: true,
            ..GameOptions::default()
        };
        let mut game = Game::with_board(ScriptedShapes::repeat(TetrominoKind::I), options, board);
        let mut outcome = Outcome::Moved;
        while outcome == Outcome::Moved {
            outcome = game.apply(Command::Tick);
        }
        assert_eq!(outcome, Outcome::Locked { rows_cleared: 1 });
        assert_eq!(game.rows_cleared(), 1);
        // The three I squares above the cleared row shift down one.
        assert_eq!(game.board().occupied_count(), 3);
        for y in 17..=19 {
            assert_eq!(game.board().cell_at(4, y), Ok(Cell::Occupied(ColorId::Aqua)));
        }
    }

    #[test]
    fn test_dispatch_renders_only_on_change() {
        let mut game = game_of("O");
        let mut frames: Vec<GameSnapshot> = Vec::new();

        game.dispatch(Command::MoveRight, &mut frames).unwrap();
        assert_eq!(frames.len(), 1);

        for _ in 0..10 {
            game.dispatch(Command::MoveRight, &mut frames).unwrap();
        }
        // O reaches column 9 at x=7: three moves succeed, the rest are blocked.
        assert_eq!(game.active().x, 7);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.last().unwrap().active.unwrap().x, 7);
    }
}
