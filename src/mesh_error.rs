//! CgnsMeshError: unified error type for cgns-mesh public APIs
//!
//! Most failure modes in this crate are deliberately *not* errors: malformed
//! sections are dropped, undecodable names degrade to empty strings. The
//! variants here cover the remaining conditions, and only
//! [`CgnsMeshError::NotARoot`] ever escapes a `read_model` call; the
//! coordinate variants are produced by the coordinate reader and caught by the
//! zone assembler, which drops the zone and continues.

use thiserror::Error;

/// Unified error type for cgns-mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CgnsMeshError {
    /// The node handed to `read_model` is not a CGNS tree container.
    #[error("expected a `CGNSTree_t` root node, found `{0}`")]
    NotARoot(String),
    /// A zone has no `GridCoordinates_t` child at all.
    #[error("zone `{zone}` has no GridCoordinates node")]
    MissingGridCoordinates {
        /// Name of the offending zone.
        zone: String,
    },
    /// One of the three coordinate axis arrays is absent.
    #[error("zone `{zone}` is missing Coordinate{axis}")]
    MissingCoordinate {
        /// Name of the offending zone.
        zone: String,
        /// Axis suffix: `'X'`, `'Y'`, or `'Z'`.
        axis: char,
    },
    /// A coordinate axis node exists but carries no numeric payload.
    #[error("zone `{zone}`: Coordinate{axis} has no numeric payload")]
    CoordinatePayload {
        /// Name of the offending zone.
        zone: String,
        /// Axis suffix: `'X'`, `'Y'`, or `'Z'`.
        axis: char,
    },
    /// Coordinate axis arrays disagree on the number of points.
    #[error("zone `{zone}`: Coordinate{axis} has {found} values, expected {expected}")]
    CoordinateLength {
        /// Name of the offending zone.
        zone: String,
        /// Axis suffix: `'X'`, `'Y'`, or `'Z'`.
        axis: char,
        /// Point count established by the X axis.
        expected: usize,
        /// Point count found on this axis.
        found: usize,
    },
}
