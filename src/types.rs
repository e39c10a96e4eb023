use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::WalkError;
use crate::utils;

/// Board width in cells
pub const GRID_WIDTH: u32 = 17;
/// Board height in cells
pub const GRID_HEIGHT: u32 = 9;
/// Where the bishop starts, the centre of the board
pub const START_POS: (u32, u32) = (GRID_WIDTH / 2, GRID_HEIGHT / 2);

/// The config file format
#[derive(facet::Facet, Debug, Clone)]
pub struct Config {
    /// How many steps should be shown per minute while animating
    #[facet(default = 600.0)]
    steps_per_minute: f32,
    /// Draw a frame after every step instead of only the final art
    #[facet(default = true)]
    animate: bool,
    /// Clear the terminal before each frame
    #[facet(default = true)]
    clear_screen: bool,
}

/// Needs to be manually implemented because facets default only happens when
/// deserializing, not for the Default impl.
impl Default for Config {
    fn default() -> Self {
        Config {
            steps_per_minute: 600.0,
            animate: true,
            clear_screen: true,
        }
    }
}

impl Config {
    /// `<config dir>/walk_art/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("walk_art")
            .join("config.toml")
    }

    /// Read and parse a config file, `None` if it is missing or malformed
    pub fn from_file(path: &Path) -> Option<Self> {
        if let Ok(file) = std::fs::read_to_string(path)
            && let Ok(cfg) = facet_toml::from_str(&file)
        {
            Some(cfg)
        } else {
            None
        }
    }

    /// Pause between two animation frames. Rates that give no usable
    /// pause (zero, negative, or so slow the pause overflows) mean none.
    pub fn frame_interval(&self) -> Duration {
        if self.steps_per_minute > 0.0 {
            Duration::try_from_secs_f32(60.0 / self.steps_per_minute).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        }
    }

    pub fn get_steps_per_minute(&self) -> f32 {
        self.steps_per_minute
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn clear_screen(&self) -> bool {
        self.clear_screen
    }
}

/// One move of the bishop, taken from two bits of the digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionCode {
    /// `00`
    NW,
    /// `01`
    NE,
    /// `10`
    SW,
    /// `11`
    SE,
}

impl DirectionCode {
    pub const ALL: [DirectionCode; 4] = [
        DirectionCode::NW,
        DirectionCode::NE,
        DirectionCode::SW,
        DirectionCode::SE,
    ];

    /// Build a code from the two lowest bits of `bits`, the rest is ignored
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => DirectionCode::NW,
            0b01 => DirectionCode::NE,
            0b10 => DirectionCode::SW,
            _ => DirectionCode::SE,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            DirectionCode::NW => 0b00,
            DirectionCode::NE => 0b01,
            DirectionCode::SW => 0b10,
            DirectionCode::SE => 0b11,
        }
    }
}

/// Represents the board with visit counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    visits: Vec<u32>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            visits: vec![0; (GRID_WIDTH * GRID_HEIGHT) as usize],
        }
    }

    fn index(x: u32, y: u32) -> Option<usize> {
        (x < GRID_WIDTH && y < GRID_HEIGHT).then(|| (y * GRID_WIDTH + x) as usize)
    }

    pub fn visit(&mut self, x: u32, y: u32) {
        if let Some(idx) = Self::index(x, y) {
            self.visits[idx] = self.visits[idx].saturating_add(1);
        }
    }

    /// Overwrite a cell, used for the start and end markers
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        if let Some(idx) = Self::index(x, y) {
            self.visits[idx] = value;
        }
    }

    pub fn get_visits(&self, x: u32, y: u32) -> u32 {
        Self::index(x, y).map_or(0, |idx| self.visits[idx])
    }

    pub fn get_width(&self) -> u32 {
        GRID_WIDTH
    }

    pub fn get_height(&self) -> u32 {
        GRID_HEIGHT
    }
}

/// Stores the state of one walk: the board, the bishop and the moves it has
/// yet to make
#[derive(Debug, Clone)]
pub struct WalkBoard {
    grid: Grid,
    current_pos: (u32, u32),
    moves: Vec<DirectionCode>,
    cursor: usize,
    last_pos: Option<(u32, u32)>,
}

impl Default for WalkBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkBoard {
    /// A fresh board. The start cell already counts as visited once.
    pub fn new() -> Self {
        let mut grid = Grid::new();
        grid.visit(START_POS.0, START_POS.1);

        WalkBoard {
            grid,
            current_pos: START_POS,
            moves: Vec::new(),
            cursor: 0,
            last_pos: None,
        }
    }

    /// Queue up moves. Only allowed before the first step.
    pub fn load(&mut self, codes: impl IntoIterator<Item = DirectionCode>) -> Result<(), WalkError> {
        if self.cursor > 0 {
            return Err(WalkError::WalkInProgress);
        }
        self.moves.extend(codes);
        Ok(())
    }

    /// Perform the next move.
    ///
    /// Returns `Ok(false)` once every move has been made, and keeps doing so
    /// on every later call.
    pub fn step(&mut self) -> Result<bool, WalkError> {
        let Some(&code) = self.moves.get(self.cursor) else {
            self.last_pos = Some(self.current_pos);
            return Ok(false);
        };
        self.cursor += 1;

        let (x, y) = self.current_pos;
        let (new_x, new_y) = utils::bishop_step(x, y, code)?;
        self.grid.visit(new_x, new_y);
        self.current_pos = (new_x, new_y);

        Ok(true)
    }

    /// Stamp the start and end markers onto the board.
    ///
    /// The end marker is written last, so it wins when the bishop comes to
    /// rest on the start cell.
    pub fn finalize(&mut self) -> Result<(), WalkError> {
        let remaining = self.remaining();
        if remaining > 0 {
            return Err(WalkError::WalkIncomplete { remaining });
        }

        let (ex, ey) = *self.last_pos.get_or_insert(self.current_pos);
        self.grid.set(START_POS.0, START_POS.1, crate::draw::START_MARKER);
        self.grid.set(ex, ey, crate::draw::END_MARKER);
        Ok(())
    }

    pub fn render(&self) -> Result<String, WalkError> {
        crate::draw::render(&self.grid)
    }

    pub fn get_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get_current_pos(&self) -> (u32, u32) {
        self.current_pos
    }

    /// Where the walk ended, known once `step` has reported the end
    pub fn get_last_pos(&self) -> Option<(u32, u32)> {
        self.last_pos
    }

    pub fn get_visits(&self, x: u32, y: u32) -> u32 {
        self.grid.get_visits(x, y)
    }

    /// Moves that have been loaded but not made yet
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}
