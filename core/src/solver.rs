use rand::prelude::*;

use crate::*;

/// Plays a [`MineField`] to the end.
///
/// Whenever a revealed cell reports a nearest mine at distance `d > 1`, every hidden cell closer than `d` to it is
/// safe, so the sweeper discovers those first. Only the first numbered cell in row-major order that still has such a
/// hidden neighbour is used per move. When no safe cell is known, it guesses uniformly among the hidden cells.
///
/// ```
/// use proximine_core::*;
///
/// let config = FieldConfig::new((5, 5), 4, 2, 5).unwrap();
/// let mut field = MineField::random(config, 1);
/// let state = Sweeper::new(&mut field, 1).sweep().unwrap();
/// assert!(state.is_finished());
/// ```
#[derive(Debug)]
pub struct Sweeper<'a> {
    field: &'a mut MineField,
    rng: SmallRng,
    safe_moves: usize,
    guesses: usize,
}

impl<'a> Sweeper<'a> {
    pub fn new(field: &'a mut MineField, seed: u64) -> Self {
        Self::with_rng(field, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(field: &'a mut MineField, rng: SmallRng) -> Self {
        Self {
            field,
            rng,
            safe_moves: 0,
            guesses: 0,
        }
    }

    pub fn safe_moves(&self) -> usize {
        self.safe_moves
    }

    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// Discovers cells until the game is won or lost, returning the final state.
    ///
    /// Meant to be called once per field; on a finished field it returns right away.
    pub fn sweep(&mut self) -> Result<GameState> {
        let mut state = self.field.game_state();
        while !state.is_finished() {
            let coords = match self.find_safe_cell() {
                Some(coords) => {
                    log::trace!("Safe move at {coords:?}");
                    self.safe_moves += 1;
                    coords
                }
                None => {
                    let coords = self.guess()?;
                    log::trace!("Guessing at {coords:?}");
                    self.guesses += 1;
                    coords
                }
            };
            state = self.field.discover_cell(coords)?;
        }

        log::debug!(
            "Sweep finished {state:?} after {} safe moves and {} guesses",
            self.safe_moves,
            self.guesses
        );
        Ok(state)
    }

    fn find_safe_cell(&self) -> Option<Coord2> {
        let size = self.field.size();
        let board = self.field.field_state();

        iter_row_major(size)
            .filter_map(|coords| match board[coords.to_nd_index()].distance() {
                Some(mine_distance) if mine_distance > 1 => Some((coords, mine_distance)),
                _ => None,
            })
            .find_map(|(center, mine_distance)| {
                iter_row_major(size).find(|&coords| {
                    board[coords.to_nd_index()].is_unknown() && distance(center, coords) < mine_distance
                })
            })
    }

    fn guess(&mut self) -> Result<Coord2> {
        let unknown = self.field.unknown_cells();
        if unknown.is_empty() {
            // a field in progress always has at least one hidden safe cell
            return Err(FieldError::IllegalState);
        }
        Ok(unknown[self.rng.random_range(0..unknown.len())])
    }
}
