//! # cgns-mesh
//!
//! cgns-mesh converts a CGNS-style labeled node tree into a strongly-typed,
//! renderer-agnostic mesh model: zones, element sections, point coordinates,
//! connectivity, and boundary-condition metadata.
//!
//! The crate never opens a file itself. A collaborator parses the physical
//! container format (ADF/HDF5/...) into a [`tree::CgnsNode`] tree; this crate
//! is a pure, synchronous, single-pass transformation over that tree.
//!
//! ## Features
//! - Tolerant element-type resolution: explicit SIDS type codes with lexical
//!   recovery from section names when codes are absent or implausible
//! - Universal 1-based to 0-based connectivity index conversion
//! - Boundary-condition to section association via normalized-name matching
//!   with family-name fallback
//! - Text decoding for the several physical encodings CGNS dumps use for
//!   short strings (byte buffers, string arrays, character-code arrays)
//!
//! ## Error model
//! A malformed section is dropped, a zone without coordinates is dropped, and
//! undecodable metadata degrades to empty strings or `None` fields. The only
//! hard failure out of [`loader::CgnsLoader::read_model`] is handing it a node
//! that is not a CGNS tree root. Dropped zones and sections are reported via
//! the `log` facade.
//!
//! ## Usage
//! Add `cgns-mesh` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cgns-mesh = "0.3"
//! ```
//!
//! ```rust
//! use cgns_mesh::prelude::*;
//!
//! let root = CgnsNode::new("CGNSTree", "CGNSTree_t");
//! let model = CgnsLoader::default().read_model(&root).unwrap();
//! assert!(model.zones.is_empty());
//! ```

pub mod cell_type;
pub mod loader;
pub mod mesh_error;
pub mod model;
pub mod text;
pub mod tree;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::cell_type::CellType;
    pub use crate::loader::CgnsLoader;
    pub use crate::mesh_error::CgnsMeshError;
    pub use crate::model::{BoundaryInfo, CgnsModel, Connectivity, MeshData, Section, Zone};
    pub use crate::tree::{CgnsNode, Payload};
}
