#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use solver::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod solver;
mod tile;
mod types;

/// Sizing and difficulty of a mine field, fixed once the field is built.
///
/// Only obtainable through validation, deserializing included, so random generation always has room for every mine.
///
/// ```compile_fail
/// let config = proximine_core::FieldConfig { size: (2, 2), mines: 5, discoverable_radius: 1, opened_cells: 0 };
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldConfigRepr")]
pub struct FieldConfig {
    size: Coord2,
    mines: CellCount,
    discoverable_radius: Distance,
    opened_cells: CellCount,
}

#[derive(Deserialize)]
struct FieldConfigRepr {
    size: Coord2,
    mines: CellCount,
    discoverable_radius: Distance,
    opened_cells: CellCount,
}

impl TryFrom<FieldConfigRepr> for FieldConfig {
    type Error = FieldError;

    fn try_from(repr: FieldConfigRepr) -> Result<Self> {
        Self::new(
            repr.size,
            repr.mines,
            repr.discoverable_radius,
            repr.opened_cells,
        )
    }
}

impl FieldConfig {
    pub(crate) const fn new_unchecked(
        size: Coord2,
        mines: CellCount,
        discoverable_radius: Distance,
        opened_cells: CellCount,
    ) -> Self {
        Self {
            size,
            mines,
            discoverable_radius,
            opened_cells,
        }
    }

    pub fn new(
        (size_x, size_y): Coord2,
        mines: CellCount,
        discoverable_radius: Distance,
        opened_cells: CellCount,
    ) -> Result<Self> {
        if size_x < 1 || size_y < 1 {
            return Err(ConfigError::EmptyField.into());
        }

        let total_cells = mult(size_x, size_y);
        if opened_cells > total_cells || total_cells - opened_cells < mines {
            return Err(ConfigError::Unbalanced.into());
        }

        Ok(Self::new_unchecked(
            (size_x, size_y),
            mines,
            discoverable_radius,
            opened_cells,
        ))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn discoverable_radius(&self) -> Distance {
        self.discoverable_radius
    }

    pub const fn opened_cells(&self) -> CellCount {
        self.opened_cells
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Untrusted field parameters, as received from an outer request layer.
///
/// Converting into a [`FieldConfig`] runs the full validation, including the checks that the narrower field types
/// make unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldParams {
    pub horizontal_field_size: i64,
    pub vertical_field_size: i64,
    pub mines: i64,
    pub discoverable_radius: i64,
    pub opened_cells: i64,
}

impl TryFrom<FieldParams> for FieldConfig {
    type Error = FieldError;

    fn try_from(params: FieldParams) -> Result<Self> {
        fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T> {
            T::try_from(value).map_err(|_| ConfigError::TooLarge.into())
        }

        if params.horizontal_field_size < 1 || params.vertical_field_size < 1 {
            return Err(ConfigError::EmptyField.into());
        }
        if params.mines < 0 || params.opened_cells < 0 {
            return Err(ConfigError::Unbalanced.into());
        }
        if params.discoverable_radius < 0 {
            return Err(ConfigError::NegativeRadius.into());
        }
        // no two cells are further apart than 360, so larger radii all behave the same
        let discoverable_radius = Distance::try_from(params.discoverable_radius).unwrap_or(Distance::MAX);

        Self::new(
            (
                narrow(params.horizontal_field_size)?,
                narrow(params.vertical_field_size)?,
            ),
            narrow(params.mines)?,
            discoverable_radius,
            narrow(params.opened_cells)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: (i64, i64), mines: i64, radius: i64, opened: i64) -> FieldParams {
        FieldParams {
            horizontal_field_size: size.0,
            vertical_field_size: size.1,
            mines,
            discoverable_radius: radius,
            opened_cells: opened,
        }
    }

    #[test]
    fn rejects_more_mines_than_cells() {
        assert_eq!(
            FieldConfig::new((2, 2), 5, 1, 0),
            Err(FieldError::InvalidConfiguration(ConfigError::Unbalanced))
        );
    }

    #[test]
    fn accepts_completely_mined_field() {
        let config = FieldConfig::new((3, 3), 9, 1, 0).unwrap();
        assert_eq!(config.safe_cell_count(), 0);
    }

    #[test]
    fn rejects_opened_cells_crowding_out_mines() {
        assert_eq!(
            FieldConfig::new((3, 3), 5, 1, 5),
            Err(ConfigError::Unbalanced.into())
        );
        assert_eq!(
            FieldConfig::new((3, 3), 0, 1, 10),
            Err(ConfigError::Unbalanced.into())
        );
    }

    #[test]
    fn rejects_empty_field() {
        assert_eq!(
            FieldConfig::new((0, 3), 0, 1, 0),
            Err(ConfigError::EmptyField.into())
        );
    }

    #[test]
    fn params_reject_signed_garbage() {
        let cases = [
            (params((-1, 3), 1, 1, 0), ConfigError::EmptyField),
            (params((3, 0), 1, 1, 0), ConfigError::EmptyField),
            (params((3, 3), -1, 1, 0), ConfigError::Unbalanced),
            (params((3, 3), 1, 1, -2), ConfigError::Unbalanced),
            (params((3, 3), 1, -1, 0), ConfigError::NegativeRadius),
            (params((300, 3), 1, 1, 0), ConfigError::TooLarge),
            (params((2, 2), 5, 1, 0), ConfigError::Unbalanced),
        ];

        for (params, expected) in cases {
            assert_eq!(
                FieldConfig::try_from(params),
                Err(FieldError::InvalidConfiguration(expected)),
                "{params:?}"
            );
        }
    }

    #[test]
    fn params_accept_huge_radius() {
        let config = FieldConfig::try_from(params((3, 3), 1, 70_000, 0)).unwrap();

        assert_eq!(config.discoverable_radius(), Distance::MAX);
    }

    #[test]
    fn deserializing_validates_config() {
        let over_full = r#"{"size":[2,2],"mines":5,"discoverable_radius":1,"opened_cells":0}"#;
        let empty = r#"{"size":[0,2],"mines":0,"discoverable_radius":1,"opened_cells":0}"#;

        assert!(serde_json::from_str::<FieldConfig>(over_full).is_err());
        assert!(serde_json::from_str::<FieldConfig>(empty).is_err());
    }

    #[test]
    fn config_survives_serde_round_trip() {
        let config = FieldConfig::new((7, 5), 6, 3, 4).unwrap();

        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(serde_json::from_str::<FieldConfig>(&json).unwrap(), config);
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let params: FieldParams = serde_json::from_str(
            r#"{"horizontalFieldSize":5,"verticalFieldSize":4,"mines":3,"discoverableRadius":2,"openedCells":6}"#,
        )
        .unwrap();

        let config = FieldConfig::try_from(params).unwrap();

        assert_eq!(config, FieldConfig::new((5, 4), 3, 2, 6).unwrap());
    }
}
