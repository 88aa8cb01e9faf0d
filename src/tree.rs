//! CGNS/Python-style labeled tree nodes and read-only traversal helpers.
//!
//! A CGNS tree node is the quadruple `(name, value, children, type)`. The
//! physical container formats store node values with a handful of array
//! dtypes; [`Payload`] closes over them as an explicit tagged variant so the
//! loader dispatches on the tag rather than duck-typing.
//!
//! The loader only ever *reads* nodes. The builder-style constructors exist
//! for tree producers and for tests, which assemble fixture trees by hand.

/// Typed value slot of a tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No value stored on this node.
    None,
    /// Floating-point array (coordinates, solution fields).
    F64(Vec<f64>),
    /// Integer array (connectivity, ranges, type codes, char codes).
    I64(Vec<i64>),
    /// Fixed-width byte buffer, possibly NUL-padded (names, enums-as-text).
    Bytes(Vec<u8>),
    /// Array of decoded strings (unicode dtypes of the source container).
    Strings(Vec<String>),
}

impl Payload {
    /// `true` when no value is stored.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Payload::None)
    }

    /// Integer view of the payload, when it is an integer array.
    #[inline]
    pub fn as_i64(&self) -> Option<&[i64]> {
        match self {
            Payload::I64(values) => Some(values),
            _ => None,
        }
    }

    /// Numeric view widened to `f64`, when the payload is numeric.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Payload::F64(values) => Some(values.clone()),
            Payload::I64(values) => Some(values.iter().map(|&v| v as f64).collect()),
            _ => None,
        }
    }

    /// First value of a numeric payload, truncated to `i64`.
    ///
    /// CGNS writers store scalar enumeration codes as one-element arrays of
    /// whatever integer or float width they fancy.
    pub fn first_i64(&self) -> Option<i64> {
        match self {
            Payload::I64(values) => values.first().copied(),
            Payload::F64(values) => values.first().map(|&v| v as i64),
            _ => None,
        }
    }
}

/// One node of a CGNS-style labeled tree: `(name, value, children, type)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CgnsNode {
    /// Node name, unique among siblings by convention (not enforced).
    pub name: String,
    /// Typed value slot.
    pub payload: Payload,
    /// Ordered child nodes, in document order.
    pub children: Vec<CgnsNode>,
    /// CGNS node type label, e.g. `Zone_t` or `Elements_t`.
    pub label: String,
}

/// Hidden child name some container dumps use to tuck a node's array one
/// level down instead of storing it on the node itself.
const HIDDEN_DATA_KEY: &str = " data";

impl CgnsNode {
    /// Creates an empty node with the given name and type label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Payload::None,
            children: Vec::new(),
            label: label.into(),
        }
    }

    /// Sets the payload (builder style).
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Appends a child (builder style).
    #[must_use]
    pub fn with_child(mut self, child: CgnsNode) -> Self {
        self.children.push(child);
        self
    }

    /// Direct children whose type label is one of `labels`, in source order.
    pub fn children_of_type<'a>(
        &'a self,
        labels: &'a [&str],
    ) -> impl Iterator<Item = &'a CgnsNode> + 'a {
        self.children
            .iter()
            .filter(move |child| labels.contains(&child.label.as_str()))
    }

    /// First direct child with the given name, if any.
    pub fn child_by_name(&self, name: &str) -> Option<&CgnsNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// The node's payload, transparently unwrapping the hidden `" data"`
    /// child when the node's own value slot is empty.
    pub fn payload(&self) -> &Payload {
        if self.payload.is_none() {
            if let Some(data) = self.child_by_name(HIDDEN_DATA_KEY) {
                return &data.payload;
            }
        }
        &self.payload
    }
}
