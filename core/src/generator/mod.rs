use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    fn generate(self, config: &FieldConfig) -> Layout;
}

/// Mine positions and the cells opened before play begins, always disjoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub mines: BTreeSet<Coord2>,
    pub opened: BTreeSet<Coord2>,
}
