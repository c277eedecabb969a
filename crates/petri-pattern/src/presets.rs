//! Well known Life patterns.

use crate::catalog::Pattern;

/// A pattern descriptor with static storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// Column count.
    pub columns: usize,
    /// Row count.
    pub rows: usize,
    /// Run-length token stream.
    pub code: &'static str,
}

impl Preset {
    /// Converts to an owned [`Pattern`].
    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.name, self.columns, self.rows, self.code)
    }
}

/// Glider - travels one cell diagonally every 4 generations.
pub const GLIDER: Preset = Preset {
    name: "Glider",
    columns: 3,
    rows: 3,
    code: "bo$2bo$3o!",
};

/// Blinker - period 2 oscillator.
pub const BLINKER: Preset = Preset {
    name: "Blinker",
    columns: 3,
    rows: 1,
    code: "3o!",
};

/// Block - still life.
pub const BLOCK: Preset = Preset {
    name: "Block",
    columns: 2,
    rows: 2,
    code: "2o$2o!",
};

/// Beacon - period 2 oscillator.
pub const BEACON: Preset = Preset {
    name: "Beacon",
    columns: 4,
    rows: 4,
    code: "2o$2o$2b2o$2b2o!",
};

/// Toad - period 2 oscillator.
pub const TOAD: Preset = Preset {
    name: "Toad",
    columns: 4,
    rows: 2,
    code: "b3o$3o!",
};

/// Lightweight spaceship.
pub const LWSS: Preset = Preset {
    name: "Lightweight spaceship",
    columns: 5,
    rows: 4,
    code: "bo2bo$o4b$o3bo$4o!",
};

/// R-pentomino - long-lived methuselah.
pub const R_PENTOMINO: Preset = Preset {
    name: "R-pentomino",
    columns: 3,
    rows: 3,
    code: "b2o$2o$bo!",
};

/// Pulsar - period 3 oscillator.
pub const PULSAR: Preset = Preset {
    name: "Pulsar",
    columns: 13,
    rows: 13,
    code: "2b3o3b3o2b2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2b2$2b3o3b3o2b$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
};

/// Gosper glider gun - emits a glider every 30 generations.
pub const GOSPER_GLIDER_GUN: Preset = Preset {
    name: "Gosper glider gun",
    columns: 36,
    rows: 9,
    code: "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
};

/// All presets, smallest first.
pub const ALL: &[Preset] = &[
    BLINKER,
    BLOCK,
    TOAD,
    GLIDER,
    R_PENTOMINO,
    BEACON,
    LWSS,
    PULSAR,
    GOSPER_GLIDER_GUN,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_decode_strictly() {
        for preset in ALL {
            let pattern = preset.to_pattern();
            assert!(
                pattern.decode_strict().is_ok(),
                "{} does not fit its declared size",
                preset.name
            );
        }
    }

    #[test]
    fn test_preset_populations() {
        let expected = [
            (BLINKER, 3),
            (BLOCK, 4),
            (TOAD, 6),
            (GLIDER, 5),
            (R_PENTOMINO, 5),
            (BEACON, 8),
            (LWSS, 9),
            (PULSAR, 48),
            (GOSPER_GLIDER_GUN, 36),
        ];
        for (preset, population) in expected {
            assert_eq!(
                preset.to_pattern().decode().population(),
                population,
                "{}",
                preset.name
            );
        }
    }

    #[test]
    fn test_pulsar_is_symmetric() {
        let m = PULSAR.to_pattern().decode();
        for row in 0..13 {
            for col in 0..13 {
                assert_eq!(m.get(col, row), m.get(12 - col, row));
                assert_eq!(m.get(col, row), m.get(col, 12 - row));
            }
        }
    }
}
