//! Zone coordinate assembly.
//!
//! A zone's points come from three named 1-D arrays under its first
//! `GridCoordinates_t` child, column-stacked into an `(N, 3)` array. Unlike
//! sections, a zone without a complete coordinate set cannot be rendered at
//! all, so any missing or inconsistent axis is zone-fatal.

use crate::loader::labels;
use crate::mesh_error::CgnsMeshError;
use crate::tree::CgnsNode;
use itertools::izip;
use std::sync::Arc;

/// Reads the zone's shared point array.
pub(crate) fn read_points(zone_node: &CgnsNode) -> Result<Arc<[[f64; 3]]>, CgnsMeshError> {
    let grid = zone_node
        .children_of_type(&labels::GRID_COORDINATES)
        .next()
        .ok_or_else(|| CgnsMeshError::MissingGridCoordinates {
            zone: zone_node.name.clone(),
        })?;

    let x = read_axis(grid, zone_node, 'X')?;
    let y = read_axis(grid, zone_node, 'Y')?;
    let z = read_axis(grid, zone_node, 'Z')?;
    for (axis, column) in [('Y', &y), ('Z', &z)] {
        if column.len() != x.len() {
            return Err(CgnsMeshError::CoordinateLength {
                zone: zone_node.name.clone(),
                axis,
                expected: x.len(),
                found: column.len(),
            });
        }
    }

    Ok(izip!(x, y, z).map(|(x, y, z)| [x, y, z]).collect())
}

fn read_axis(grid: &CgnsNode, zone_node: &CgnsNode, axis: char) -> Result<Vec<f64>, CgnsMeshError> {
    let node = grid
        .child_by_name(&format!("Coordinate{axis}"))
        .ok_or_else(|| CgnsMeshError::MissingCoordinate {
            zone: zone_node.name.clone(),
            axis,
        })?;
    node.payload()
        .to_f64()
        .ok_or_else(|| CgnsMeshError::CoordinatePayload {
            zone: zone_node.name.clone(),
            axis,
        })
}
