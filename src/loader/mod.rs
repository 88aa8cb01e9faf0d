//! Tree-to-model loader.
//!
//! [`CgnsLoader`] walks an already-materialized [`CgnsNode`] tree and
//! assembles a [`CgnsModel`]: every base, every zone, every renderable
//! element section, boundary metadata attached. The walk is synchronous and
//! single-pass; nothing in the tree is mutated.
//!
//! # Failure severities
//! - Zone-fatal: unreadable coordinates drop the whole zone (logged, load
//!   continues with the remaining zones).
//! - Section-local: unresolved element kind or malformed connectivity drops
//!   that one section.
//! - Metadata-local: undecodable text and unmatched BC nodes degrade
//!   silently.
//!
//! Only a non-root input node fails the load call itself.

mod boundary;
mod coordinates;
mod section;

use crate::mesh_error::CgnsMeshError;
use crate::model::{CgnsModel, Zone};
use crate::tree::CgnsNode;
use boundary::FamilyRegistry;

pub(crate) mod labels {
    //! CGNS node type labels recognized by the loader.
    pub const TREE: &str = "CGNSTree_t";
    /// Both spellings occur in the wild.
    pub const BASES: [&str; 2] = ["CGNSBase_t", "Base_t"];
    pub const ZONE: [&str; 1] = ["Zone_t"];
    pub const ELEMENTS: [&str; 1] = ["Elements_t"];
    pub const GRID_COORDINATES: [&str; 1] = ["GridCoordinates_t"];
    pub const ZONE_BC: [&str; 1] = ["ZoneBC_t"];
    pub const BC: [&str; 1] = ["BC_t"];
    pub const FAMILY: [&str; 1] = ["Family_t"];
}

/// Loader for CGNS-style node trees.
#[derive(Debug, Default, Clone)]
pub struct CgnsLoader;

impl CgnsLoader {
    /// Assembles a model from a tree root.
    ///
    /// Zones that fail to assemble (missing or inconsistent coordinate axes)
    /// are excluded from the result; their absence is observable only through
    /// zone counts and a `log::warn!`. The only hard failure is a root node
    /// that is not a `CGNSTree_t` container.
    pub fn read_model(&self, root: &CgnsNode) -> Result<CgnsModel, CgnsMeshError> {
        if root.label != labels::TREE {
            return Err(CgnsMeshError::NotARoot(root.label.clone()));
        }

        let mut zones = Vec::new();
        for base in root.children_of_type(&labels::BASES) {
            let families = FamilyRegistry::build(base);
            for zone_node in base.children_of_type(&labels::ZONE) {
                match self.read_zone(zone_node, &families) {
                    Ok(zone) => zones.push(zone),
                    Err(err) => log::warn!("skipping zone `{}`: {err}", zone_node.name),
                }
            }
        }
        Ok(CgnsModel { zones })
    }

    /// Assembles one zone: coordinates, sections, boundary metadata.
    fn read_zone(
        &self,
        zone_node: &CgnsNode,
        families: &FamilyRegistry,
    ) -> Result<Zone, CgnsMeshError> {
        let points = coordinates::read_points(zone_node)?;

        let mut sections = Vec::new();
        for (idx, elem_node) in zone_node.children_of_type(&labels::ELEMENTS).enumerate() {
            let provisional_id = idx as u32 + 1;
            if let Some(section) = section::read_section(elem_node, &points, provisional_id) {
                sections.push(section);
            }
        }

        boundary::attach(zone_node, families, &mut sections);

        // Dropped siblings must not leave id gaps.
        for (idx, section) in sections.iter_mut().enumerate() {
            section.id = idx as u32 + 1;
        }

        Ok(Zone {
            name: zone_node.name.clone(),
            sections,
        })
    }
}
