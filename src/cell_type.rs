//! Element kinds supported by the loader.
//!
//! The loader renders seven linear element kinds. Resolution uses two
//! evidence sources, tried in order: the explicit SIDS type code, and a
//! case-insensitive token match on a name. Source files are observed to carry
//! inconsistent or placeholder type codes, so the lexical path must be tried
//! whenever the code falls outside the closed table, not only when it is
//! absent.

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topological category of a mesh element.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 2-node line segment (SIDS `BAR_2`).
    Line2,
    /// 3-node triangle (SIDS `TRI_3`).
    Tri3,
    /// 4-node quadrilateral (SIDS `QUAD_4`).
    Quad4,
    /// 4-node tetrahedron (SIDS `TETRA_4`).
    Tetra4,
    /// 5-node pyramid (SIDS `PYRA_5`).
    Pyra5,
    /// 6-node prism/wedge (SIDS `PENTA_6`).
    Penta6,
    /// 8-node hexahedron (SIDS `HEXA_8`).
    Hexa8,
}

/// All supported kinds, in SIDS declaration order.
///
/// The order matters for lexical inference: first token hit wins.
pub const ALL_CELL_TYPES: [CellType; 7] = [
    CellType::Line2,
    CellType::Tri3,
    CellType::Quad4,
    CellType::Tetra4,
    CellType::Pyra5,
    CellType::Penta6,
    CellType::Hexa8,
];

/// SIDS element type codes for the supported kinds.
static CODE_TABLE: Lazy<HashMap<i64, CellType>> = Lazy::new(|| {
    HashMap::from_iter([
        (3, CellType::Line2),
        (5, CellType::Tri3),
        (7, CellType::Quad4),
        (10, CellType::Tetra4),
        (12, CellType::Pyra5),
        (14, CellType::Penta6),
        (17, CellType::Hexa8),
    ])
});

impl CellType {
    /// Number of vertices per element of this kind.
    pub const fn node_count(self) -> usize {
        match self {
            CellType::Line2 => 2,
            CellType::Tri3 => 3,
            CellType::Quad4 | CellType::Tetra4 => 4,
            CellType::Pyra5 => 5,
            CellType::Penta6 => 6,
            CellType::Hexa8 => 8,
        }
    }

    /// Topological dimension of the cell.
    pub const fn dimension(self) -> u8 {
        match self {
            CellType::Line2 => 1,
            CellType::Tri3 | CellType::Quad4 => 2,
            CellType::Tetra4 | CellType::Pyra5 | CellType::Penta6 | CellType::Hexa8 => 3,
        }
    }

    /// The CGNS SIDS name, e.g. `TETRA_4`.
    pub const fn sids_name(self) -> &'static str {
        match self {
            CellType::Line2 => "BAR_2",
            CellType::Tri3 => "TRI_3",
            CellType::Quad4 => "QUAD_4",
            CellType::Tetra4 => "TETRA_4",
            CellType::Pyra5 => "PYRA_5",
            CellType::Penta6 => "PENTA_6",
            CellType::Hexa8 => "HEXA_8",
        }
    }

    /// Leading token of the SIDS name, used for lexical inference.
    const fn token(self) -> &'static str {
        match self {
            CellType::Line2 => "BAR",
            CellType::Tri3 => "TRI",
            CellType::Quad4 => "QUAD",
            CellType::Tetra4 => "TETRA",
            CellType::Pyra5 => "PYRA",
            CellType::Penta6 => "PENTA",
            CellType::Hexa8 => "HEXA",
        }
    }

    /// Resolves a SIDS element type code through the closed code table.
    ///
    /// Codes outside the table (including codes of unrenderable kinds) yield
    /// `None` so callers can fall through to lexical inference.
    pub fn from_code(code: i64) -> Option<Self> {
        CODE_TABLE.get(&code).copied()
    }

    /// Infers a kind from a name containing one of the known tokens as a
    /// case-insensitive substring (e.g. `TETRA` inside `Elem_TETRA_4`).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        let upper = name.to_uppercase();
        ALL_CELL_TYPES
            .into_iter()
            .find(|kind| upper.contains(kind.token()))
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sids_name())
    }
}



#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        for kind in ALL_CELL_TYPES {
            let s = serde_json::to_string(&kind).unwrap();
            let back: CellType = serde_json::from_str(&s).unwrap();
            assert_eq!(back, kind);
        }
    }
}
