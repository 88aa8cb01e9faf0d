//! Element section reading.
//!
//! Every `Elements_t` child of a zone becomes at most one [`Section`]. A
//! section that cannot be read (unresolved kind, missing or malformed
//! connectivity) is dropped without failing the zone; sibling sections are
//! unaffected and the caller only observes a smaller section count.

use crate::cell_type::CellType;
use crate::model::{Connectivity, MeshData, Section};
use crate::text;
use crate::tree::CgnsNode;
use std::sync::Arc;

const CONNECTIVITY_NAME: &str = "ElementConnectivity";
const RANGE_NAME: &str = "ElementRange";
const TYPE_NAME: &str = "ElementType";

/// Builds one section from an `Elements_t` node, or `None` if the section is
/// unrenderable or malformed.
pub(crate) fn read_section(
    elem_node: &CgnsNode,
    points: &Arc<[[f64; 3]]>,
    provisional_id: u32,
) -> Option<Section> {
    let cell_type = resolve_cell_type(elem_node)?;

    let raw = elem_node
        .child_by_name(CONNECTIVITY_NAME)?
        .payload()
        .as_i64()?;

    let arity = cell_type.node_count();
    if raw.len() % arity != 0 {
        log::debug!(
            "section `{}`: {} connectivity values do not fill {}-node {} cells, dropped",
            elem_node.name,
            raw.len(),
            arity,
            cell_type,
        );
        return None;
    }

    // Source files number vertices from 1; the model is 0-based throughout.
    let mut indices = Vec::with_capacity(raw.len());
    for &value in raw {
        if value < 1 || value as usize > points.len() {
            log::debug!(
                "section `{}`: connectivity index {value} outside 1..={}, dropped",
                elem_node.name,
                points.len(),
            );
            return None;
        }
        indices.push(value as usize - 1);
    }

    let cell_count = indices.len() / arity;
    let element_range = elem_node
        .child_by_name(RANGE_NAME)
        .and_then(|node| match node.payload().as_i64() {
            Some([first, last, ..]) => Some((*first, *last)),
            _ => None,
        })
        .unwrap_or((1, cell_count as i64));

    let clean = text::clean_name(&elem_node.name);
    let name = if clean.is_empty() {
        elem_node.name.clone()
    } else {
        clean
    };

    Some(Section {
        id: provisional_id,
        name,
        cell_type,
        element_range,
        mesh: MeshData {
            points: Arc::clone(points),
            connectivity: Connectivity::new(indices, arity),
            cell_type,
        },
        boundary: None,
    })
}

/// Resolves the element kind of a section node.
///
/// Evidence priority: the numeric code on the node's own payload, then an
/// `ElementType` child (numeric code or SIDS name as text), then lexical
/// inference on the section name. Unknown codes fall through to the next
/// source rather than erroring; files are observed to carry placeholder
/// codes.
fn resolve_cell_type(elem_node: &CgnsNode) -> Option<CellType> {
    if let Some(code) = elem_node.payload().first_i64() {
        if let Some(kind) = CellType::from_code(code) {
            return Some(kind);
        }
    }

    if let Some(type_node) = elem_node.child_by_name(TYPE_NAME) {
        if let Some(kind) = type_node.payload().first_i64().and_then(CellType::from_code) {
            return Some(kind);
        }
        if let Some(kind) = CellType::from_name(&text::decode_text(type_node.payload())) {
            return Some(kind);
        }
    }

    match CellType::from_name(&elem_node.name) {
        Some(kind) => Some(kind),
        None => {
            log::debug!(
                "section `{}`: element kind unresolved, dropped",
                elem_node.name
            );
            None
        }
    }
}
