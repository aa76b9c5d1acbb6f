use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game: owns the grid, the hidden mines and the game state.
///
/// The grid is indexed `[x, y]`. It is only mutated through [`MineField::discover_cell`] and
/// [`MineField::seed_from_map`], and every mutation is followed by a proximity recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineFieldRepr")]
pub struct MineField {
    config: FieldConfig,
    mines: BTreeSet<Coord2>,
    board: Array2<FieldCell>,
    state: GameState,
}

#[derive(Deserialize)]
struct MineFieldRepr {
    config: FieldConfig,
    mines: BTreeSet<Coord2>,
    board: Array2<FieldCell>,
    state: GameState,
}

impl TryFrom<MineFieldRepr> for MineField {
    type Error = FieldError;

    fn try_from(repr: MineFieldRepr) -> Result<Self> {
        let (size_x, size_y) = repr.config.size;
        let board_matches = repr.board.dim() == (size_x.into(), size_y.into());
        let mines_match = repr.mines.len() == usize::from(repr.config.mines)
            && repr.mines.iter().all(|&(x, y)| x < size_x && y < size_y);
        if !board_matches || !mines_match {
            return Err(FieldError::InvalidSnapshot);
        }

        Ok(Self {
            config: repr.config,
            mines: repr.mines,
            board: repr.board,
            state: repr.state,
        })
    }
}

impl MineField {
    pub fn new(config: FieldConfig, generator: impl LayoutGenerator) -> Self {
        let Layout { mines, opened } = generator.generate(&config);
        let mut board: Array2<FieldCell> = Array2::default(config.size.to_nd_index());
        for &coords in &opened {
            board[coords.to_nd_index()] = FieldCell::Empty;
        }

        log::debug!("New mine field: {config:?}");
        let mut field = Self {
            config,
            mines,
            board,
            state: Default::default(),
        };
        field.recompute();
        field
    }

    pub fn random(config: FieldConfig, seed: u64) -> Self {
        Self::new(config, RandomLayoutGenerator::new(seed))
    }

    /// Builds a field from a fully known map, see [`MineField::seed_from_map`].
    pub fn from_map<R: AsRef<[FieldCell]>>(rows: &[R], discoverable_radius: Distance) -> Result<Self> {
        let mut field = Self {
            config: FieldConfig::new_unchecked((1, 1), 0, discoverable_radius, 0),
            mines: BTreeSet::new(),
            board: Array2::default([1, 1]),
            state: Default::default(),
        };
        field.seed_from_map(rows)?;
        Ok(field)
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    /// Read-only view of the grid, indexed `[x, y]`.
    pub fn field_state(&self) -> ArrayView2<'_, FieldCell> {
        self.board.view()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<FieldCell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    /// Coordinates of all unrevealed cells in row-major order.
    pub fn unknown_cells(&self) -> Vec<Coord2> {
        iter_row_major(self.size())
            .filter(|&coords| self.board[coords.to_nd_index()].is_unknown())
            .collect()
    }

    /// Flat presentation of the grid keyed by `x_<i>^y_<j>`.
    pub fn to_map(&self) -> BTreeMap<String, FieldCell> {
        iter_row_major(self.size())
            .map(|(x, y)| (format!("x_{x}^y_{y}"), self.board[(x, y).to_nd_index()]))
            .collect()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(FieldError::OutOfBounds)
        }
    }

    pub fn discover_cell(&mut self, coords: Coord2) -> Result<GameState> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        if self.mines.contains(&coords) {
            log::debug!("Mine hit at {coords:?}, game lost");
            self.state = GameState::Lost;
            for &mine in &self.mines {
                self.board[mine.to_nd_index()] = FieldCell::Mine;
            }
        } else if self.board[coords.to_nd_index()].is_unknown() {
            self.board[coords.to_nd_index()] = FieldCell::Empty;
        }

        self.recompute();
        Ok(self.state)
    }

    /// Replaces the whole field with a known map, bypassing random generation.
    ///
    /// Rows are indexed by `y` and columns by `x`. Cells holding [`FieldCell::Mine`] become hidden mines, every other
    /// cell is kept as given. Size, mine count and opened count are taken from the map, the discoverable radius is
    /// kept, and the game restarts as [`GameState::InProgress`]. Only the shape of the map is validated.
    pub fn seed_from_map<R: AsRef<[FieldCell]>>(&mut self, rows: &[R]) -> Result<()> {
        let size_y = Coord::try_from(rows.len()).map_err(|_| FieldError::InvalidMapShape)?;
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let size_x = Coord::try_from(width).map_err(|_| FieldError::InvalidMapShape)?;
        if size_x == 0 || size_y == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(FieldError::InvalidMapShape);
        }

        let size = (size_x, size_y);
        let mut mines = BTreeSet::new();
        let mut opened_cells: CellCount = 0;
        let board = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            match rows[y].as_ref()[x] {
                FieldCell::Mine => {
                    mines.insert((x as Coord, y as Coord));
                    FieldCell::Unknown
                }
                FieldCell::Unknown => FieldCell::Unknown,
                cell => {
                    opened_cells += 1;
                    cell
                }
            }
        });

        let mine_count = mines.len() as CellCount;
        self.config = FieldConfig::new_unchecked(
            size,
            mine_count,
            self.config.discoverable_radius,
            opened_cells,
        );
        self.mines = mines;
        self.board = board;
        self.state = GameState::InProgress;
        log::debug!("Seeded predefined map: {:?}", self.config);

        self.recompute();
        Ok(())
    }

    /// Writes proximity values into empty cells and checks for a win.
    ///
    /// Cells already holding a distance are left alone, so running this twice changes nothing.
    fn recompute(&mut self) {
        let radius = self.config.discoverable_radius;
        let mut unknown_count: CellCount = 0;

        for coords in iter_row_major(self.size()) {
            let cell = &mut self.board[coords.to_nd_index()];
            match *cell {
                FieldCell::Unknown => unknown_count += 1,
                FieldCell::Empty => {
                    let nearest = self.mines.iter().map(|&mine| distance(coords, mine)).min();
                    if let Some(nearest) = nearest.filter(|&nearest| nearest <= radius) {
                        *cell = FieldCell::Distance(nearest);
                    }
                }
                FieldCell::Mine | FieldCell::Distance(_) => {}
            }
        }

        if unknown_count == self.config.mines && self.state == GameState::InProgress {
            log::debug!("All safe cells discovered, game won");
            self.state = GameState::Won;
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(FieldError::IllegalState)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for MineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size_x, size_y) = self.size();
        for y in 0..size_y {
            for x in 0..size_x {
                write!(f, "|{}", self.board[(x, y).to_nd_index()])?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
