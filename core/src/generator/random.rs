use rand::prelude::*;

use super::*;

/// Picks a uniformly random in-bounds coordinate.
pub fn random_coords(rng: &mut SmallRng, (size_x, size_y): Coord2) -> Coord2 {
    (rng.random_range(0..size_x), rng.random_range(0..size_y))
}

/// Purely random generation: mines are drawn first, then the pre-opened cells are drawn among the remaining ones.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: &FieldConfig) -> Layout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut layout = Layout::default();

        // validated configs leave room for every draw, so both loops terminate
        while layout.mines.len() < usize::from(config.mines) {
            layout.mines.insert(random_coords(&mut rng, config.size));
        }

        while layout.opened.len() < usize::from(config.opened_cells) {
            let coords = random_coords(&mut rng, config.size);
            if !layout.mines.contains(&coords) {
                layout.opened.insert(coords);
            }
        }

        log::trace!(
            "Generated layout with {} mines and {} opened cells",
            layout.mines.len(),
            layout.opened.len()
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord2, mines: CellCount, opened_cells: CellCount) -> FieldConfig {
        FieldConfig::new(size, mines, 1, opened_cells).unwrap()
    }

    #[test]
    fn generates_exact_disjoint_sets() {
        let config = config((6, 4), 7, 5);

        let layout = RandomLayoutGenerator::new(42).generate(&config);

        assert_eq!(layout.mines.len(), 7);
        assert_eq!(layout.opened.len(), 5);
        assert!(layout.mines.is_disjoint(&layout.opened));
        assert!(
            layout
                .mines
                .iter()
                .chain(&layout.opened)
                .all(|&(x, y)| x < 6 && y < 4)
        );
    }

    #[test]
    fn fills_a_tight_field() {
        let config = config((3, 3), 4, 5);

        let layout = RandomLayoutGenerator::new(7).generate(&config);

        assert_eq!(layout.mines.len() + layout.opened.len(), 9);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = config((10, 10), 15, 10);

        let first = RandomLayoutGenerator::new(1234).generate(&config);
        let second = RandomLayoutGenerator::new(1234).generate(&config);

        assert_eq!(first, second);
    }
}
