//! Core data structures for the loaded mesh model.
//!
//! Ownership follows the zone: a zone exclusively owns its point array and
//! every section built from that zone holds a shared read-only handle to it,
//! never a copy. The model is assembled in one pass and not mutated
//! afterwards.

use crate::cell_type::CellType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Row-major `(M, K)` connectivity matrix with 0-based vertex indices.
///
/// `K` is the fixed arity of the section's element kind; each row is one
/// element in file declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    indices: Vec<usize>,
    stride: usize,
}

impl Connectivity {
    /// Wraps a flat index buffer. `indices.len()` must be a multiple of
    /// `stride`; the section reader guarantees this before construction.
    pub(crate) fn new(indices: Vec<usize>, stride: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert_eq!(indices.len() % stride, 0);
        Self { indices, stride }
    }

    /// Number of elements (rows).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.indices.len() / self.stride
    }

    /// Vertices per element (row width).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.stride
    }

    /// Vertex indices of element `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> &[usize] {
        &self.indices[i * self.stride..(i + 1) * self.stride]
    }

    /// Iterates over elements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.indices.chunks_exact(self.stride)
    }

    /// The flat row-major index buffer.
    #[inline]
    pub fn as_flat(&self) -> &[usize] {
        &self.indices
    }
}

/// Point and connectivity data for one mesh fragment.
#[derive(Debug, Clone)]
pub struct MeshData {
    /// Zone-wide point array, shared by every section of the zone.
    pub points: Arc<[[f64; 3]]>,
    /// 0-based connectivity into `points`.
    pub connectivity: Connectivity,
    /// Element kind of every cell in this fragment.
    pub cell_type: CellType,
}

impl MeshData {
    /// Number of points in the zone's shared coordinate array.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cells in this fragment.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.connectivity.cell_count()
    }
}

/// Boundary-condition metadata attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryInfo {
    /// Resolved family/BC name, intended for UI display.
    pub display_name: String,
    /// Grid location qualifier (`Vertex`, `FaceCenter`, ...), carried
    /// verbatim from the source and not validated against a closed set.
    pub grid_location: Option<String>,
}

/// A homogeneous group of elements of one kind inside a zone.
#[derive(Debug, Clone)]
pub struct Section {
    /// Dense 1-based id, assigned after unsupported siblings are filtered.
    pub id: u32,
    /// Cleaned display name (falls back to the raw node name).
    pub name: String,
    /// Element kind of this section.
    pub cell_type: CellType,
    /// Declared 1-based element index range, or `(1, M)` when absent.
    pub element_range: (i64, i64),
    /// Geometry shared with the owning zone.
    pub mesh: MeshData,
    /// Boundary metadata, present iff a BC node claimed this section.
    pub boundary: Option<BoundaryInfo>,
}

impl Section {
    /// `true` when a boundary condition claimed this section; renderers treat
    /// such sections as boundary facets rather than body volumes.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.boundary.is_some()
    }
}

/// A mesh partition with its own coordinate array and element sections.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    /// Zone node name.
    pub name: String,
    /// Retained sections, ids dense `1..=len`.
    pub sections: Vec<Section>,
}

impl Zone {
    /// Total cell count across all sections.
    pub fn total_cells(&self) -> usize {
        self.sections.iter().map(|s| s.mesh.cell_count()).sum()
    }

    /// Point count of the zone's shared coordinate array.
    pub fn total_points(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.mesh.point_count())
            .max()
            .unwrap_or(0)
    }

    /// Sections with no boundary condition (body volumes).
    pub fn body_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_boundary())
    }

    /// Sections claimed by a boundary condition.
    pub fn boundary_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_boundary())
    }
}

/// Root container for one loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct CgnsModel {
    /// Zones in document order across all bases.
    pub zones: Vec<Zone>,
}

impl CgnsModel {
    /// Looks up a section by zone name and section id.
    pub fn find_section(&self, zone_name: &str, section_id: u32) -> Option<&Section> {
        self.zones
            .iter()
            .filter(|zone| zone.name == zone_name)
            .flat_map(|zone| zone.sections.iter())
            .find(|section| section.id == section_id)
    }
}
