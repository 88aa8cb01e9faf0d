//! Family registry and boundary-condition attachment.
//!
//! CGNS carries no foreign key from a `BC_t` node to the `Elements_t` section
//! it describes; the association is by name. Matching is greedy
//! first-match with a FIFO queue per normalized name, so several identically
//! named sections each receive one boundary record in declaration order. The
//! discipline is deliberately not a global optimal matching; document order
//! is the only tie-break.

use crate::loader::labels;
use crate::model::{BoundaryInfo, Section};
use crate::text::{clean_name, decode_text, normalize_key};
use crate::tree::CgnsNode;
use hashbrown::HashMap;
use std::collections::VecDeque;

const FAMILY_NAME: &str = "FamilyName";
const GRID_LOCATION: &str = "GridLocation";

/// Per-base lookup from normalized family name to display name.
///
/// Built once per base, consumed read-only during boundary attachment.
#[derive(Debug, Default)]
pub(crate) struct FamilyRegistry {
    names: HashMap<String, String>,
}

impl FamilyRegistry {
    /// Scans the base's `Family_t` children.
    ///
    /// The display name prefers an explicit `FamilyName` child over the
    /// node's own raw name. Each family registers under the normalized
    /// variants of both its raw and display names; first declaration wins.
    pub(crate) fn build(base_node: &CgnsNode) -> Self {
        let mut names: HashMap<String, String> = HashMap::new();
        for family in base_node.children_of_type(&labels::FAMILY) {
            let decoded = family
                .child_by_name(FAMILY_NAME)
                .map(|node| decode_text(node.payload()))
                .unwrap_or_default();
            let display = if !decoded.is_empty() {
                decoded
            } else {
                let clean = clean_name(&family.name);
                if clean.is_empty() {
                    family.name.clone()
                } else {
                    clean
                }
            };
            for candidate in [family.name.as_str(), display.as_str()] {
                let key = normalize_key(candidate);
                if !key.is_empty() {
                    names.entry(key).or_insert_with(|| display.clone());
                }
            }
        }
        Self { names }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }
}

/// Matches `BC_t` nodes under the zone's `ZoneBC_t` container to sections and
/// writes [`BoundaryInfo`] onto the matched ones. Sections no BC claims keep
/// `boundary = None`; BC nodes matching no section are ignored.
pub(crate) fn attach(zone_node: &CgnsNode, families: &FamilyRegistry, sections: &mut [Section]) {
    let Some(zone_bc) = zone_node.children_of_type(&labels::ZONE_BC).next() else {
        return;
    };

    // Unclaimed sections, FIFO per normalized name.
    let mut unclaimed: HashMap<String, VecDeque<usize>> = HashMap::new();
    for (idx, section) in sections.iter().enumerate() {
        let key = normalize_key(&section.name);
        if !key.is_empty() {
            unclaimed.entry(key).or_default().push_back(idx);
        }
    }

    for bc_node in zone_bc.children_of_type(&labels::BC) {
        let candidates = [clean_name(&bc_node.name), bc_node.name.clone()];

        let mut claimed: Option<(usize, &str)> = None;
        for candidate in &candidates {
            let key = normalize_key(candidate);
            if key.is_empty() {
                continue;
            }
            if let Some(queue) = unclaimed.get_mut(&key) {
                if let Some(idx) = queue.pop_front() {
                    claimed = Some((idx, candidate.as_str()));
                    break;
                }
            }
        }
        let Some((idx, matched_name)) = claimed else {
            log::debug!("boundary `{}` matches no section, ignored", bc_node.name);
            continue;
        };

        let grid_location = bc_node
            .child_by_name(GRID_LOCATION)
            .map(|node| decode_text(node.payload()))
            .filter(|text| !text.is_empty());

        let section = &mut sections[idx];
        let display_name = resolve_family_name(bc_node, families)
            .or_else(|| (!matched_name.is_empty()).then(|| matched_name.to_string()))
            .unwrap_or_else(|| section.name.clone());

        // Later BC nodes win on an (abnormal) re-match.
        section.boundary = Some(BoundaryInfo {
            display_name,
            grid_location,
        });
    }
}

/// Resolves the family display name for a BC node.
///
/// An explicit `FamilyName` child wins: its decoded text is looked up in the
/// registry, falling back to the decoded text itself on a registry miss.
/// Without one, the BC's own name is tried against the registry, covering
/// files that name BC nodes directly after their family group.
fn resolve_family_name(bc_node: &CgnsNode, families: &FamilyRegistry) -> Option<String> {
    if let Some(node) = bc_node.child_by_name(FAMILY_NAME) {
        let decoded = decode_text(node.payload());
        if !decoded.is_empty() {
            let key = normalize_key(&decoded);
            return Some(families.get(&key).map_or(decoded, str::to_owned));
        }
    }

    let key = normalize_key(&bc_node.name);
    if key.is_empty() {
        None
    } else {
        families.get(&key).map(str::to_owned)
    }
}
