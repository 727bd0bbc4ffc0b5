use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Menu -> Start
/// - Start -> Playing
/// - Playing -> Defeat
/// - Playing -> Victory
/// - Defeat | Victory -> Menu
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the player to start a game
    #[default]
    Menu,
    /// Board generated, nothing revealed yet
    Start,
    /// The rest of the game until it is won or lost
    Playing,
    Defeat,
    Victory,
}

impl SessionState {
    /// Whether the cursor and flags respond to input
    pub const fn is_in_game(self) -> bool {
        matches!(self, Self::Start | Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Defeat | Self::Victory)
    }
}

/// Discrete events produced by the input layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Check,
    Flag,
}

impl Input {
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Check | Self::Flag => None,
        }
    }
}

/// What handling a single input did, so the host knows whether to redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    NoChange,
    Moved,
    Started,
    Marked,
    Revealed,
    Won,
    Lost,
    ReturnedToMenu,
}

impl SessionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One player's sequence of games on a fixed board configuration.
///
/// The host feeds it [`Input`] events and calls [`Session::tick`] once per second; each call runs
/// to completion before the next one can start.
#[derive(Clone, Debug)]
pub struct Session<F> {
    config: GameConfig,
    grid: Grid,
    cursor: Cursor,
    state: SessionState,
    fields_left: CellCount,
    flags_placed: i32,
    elapsed_secs: u32,
    triggered_mine: Option<Coord2>,
    fractions: F,
}

impl<F: FractionSource> Session<F> {
    pub fn new(config: GameConfig, fractions: F) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::empty(config.width, config.height)?,
            cursor: Cursor::default(),
            state: SessionState::default(),
            fields_left: config.safe_cell_count(),
            flags_placed: 0,
            elapsed_secs: 0,
            triggered_mine: None,
            fractions,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selected_cell(&self) -> Cell {
        self.grid[self.cursor.coords()]
    }

    /// Safe cells still hidden; the game is won when this reaches zero.
    pub fn fields_left(&self) -> CellCount {
        self.fields_left
    }

    pub fn flags_placed(&self) -> i32 {
        self.flags_placed
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - self.flags_placed
    }

    /// The mine that ended the game, if it was lost
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Game time as `(minutes, seconds)`.
    pub fn elapsed(&self) -> (u32, u32) {
        (self.elapsed_secs / 60, self.elapsed_secs % 60)
    }

    /// Advances the game clock by one second, only while playing. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if matches!(self.state, SessionState::Playing) {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            true
        } else {
            false
        }
    }

    pub fn handle(&mut self, input: Input) -> SessionOutcome {
        log::trace!("input {:?} in {:?} at {:?}", input, self.state, self.cursor);

        if let Some(direction) = input.direction() {
            return self.handle_movement(direction);
        }

        match input {
            Input::Check => self.handle_check(),
            Input::Flag => self.handle_flag(),
            _ => SessionOutcome::NoChange,
        }
    }

    fn handle_movement(&mut self, direction: Direction) -> SessionOutcome {
        if !self.state.is_in_game() {
            return SessionOutcome::NoChange;
        }
        self.cursor.step(direction, self.config.width, self.config.height);
        SessionOutcome::Moved
    }

    fn handle_check(&mut self) -> SessionOutcome {
        use SessionState::*;

        match self.state {
            Menu => {
                self.start_game();
                SessionOutcome::Started
            }
            Start => {
                self.state = Playing;
                self.make_first_reveal_safe();
                self.reveal_selected()
            }
            Playing => self.reveal_selected(),
            Defeat | Victory => SessionOutcome::NoChange,
        }
    }

    fn handle_flag(&mut self) -> SessionOutcome {
        use SessionState::*;

        match self.state {
            Defeat | Victory => {
                self.state = Menu;
                log::debug!("Back to menu");
                SessionOutcome::ReturnedToMenu
            }
            Start | Playing => match self.grid.toggle_flag(self.cursor.coords()) {
                MarkOutcome::Flagged => {
                    self.flags_placed += 1;
                    SessionOutcome::Marked
                }
                MarkOutcome::Unflagged => {
                    self.flags_placed -= 1;
                    SessionOutcome::Marked
                }
                MarkOutcome::NoChange => SessionOutcome::NoChange,
            },
            Menu => SessionOutcome::NoChange,
        }
    }

    fn start_game(&mut self) {
        self.grid.reset(self.config.mines, &mut self.fractions);
        self.fields_left = self.grid.safe_cell_count();
        self.flags_placed = 0;
        self.elapsed_secs = 0;
        self.triggered_mine = None;
        self.state = SessionState::Start;
        log::debug!(
            "New game: {}x{} with {} mines",
            self.config.width,
            self.config.height,
            self.grid.mine_count()
        );
    }

    /// Moves a mine under the cursor away before the first reveal.
    fn make_first_reveal_safe(&mut self) {
        let coords = self.cursor.coords();
        if !self.grid[coords].is_mine() {
            return;
        }

        if self.grid.move_mine(coords, self.grid.reserved_coords()) {
            return;
        }

        log::warn!("Reserved cell already holds a mine, relocating to the first free cell");
        let fallback = self
            .grid
            .iter()
            .find(|&(_, cell)| !cell.is_mine())
            .map(|(pos, _)| pos);
        match fallback {
            Some(target) => {
                self.grid.move_mine(coords, target);
            }
            None => log::warn!("No free cell left for the first mine at {:?}", coords),
        }
    }

    fn reveal_selected(&mut self) -> SessionOutcome {
        let coords = self.cursor.coords();
        let cell = self.grid[coords];

        if cell.is_mine() {
            self.triggered_mine = Some(coords);
            self.finish(SessionState::Defeat);
            return SessionOutcome::Lost;
        }

        if cell.is_revealed() {
            return SessionOutcome::NoChange;
        }

        let tally = self.grid.reveal_section(coords);
        self.fields_left = self.fields_left.saturating_sub(tally.revealed);
        self.flags_placed -= i32::from(tally.flags_cleared);

        if self.fields_left == 0 {
            self.finish(SessionState::Victory);
            SessionOutcome::Won
        } else {
            SessionOutcome::Revealed
        }
    }

    fn finish(&mut self, state: SessionState) {
        self.state = state;
        self.grid.reveal_all();
        log::debug!("Game ended in {:?} after {} seconds", state, self.elapsed_secs);
    }
}
