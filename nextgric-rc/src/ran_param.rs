//! RAN parameter tree representation
//!
//! E2SM-RC control message bodies are hierarchical, self-describing
//! parameter trees: lists of unkeyed members, structures of keyed fields,
//! and scalar elements at the leaves. A conforming receiver parses the
//! tree positionally and by parameter id, so child count and ordering are
//! part of the schema contract.
//!
//! Containers are built bottom-up through capacity-checked builders: a
//! builder either yields a fully populated container or an error, so a
//! partially constructed tree is never observable. The tree is a pure
//! ownership tree (no sharing, no cycles) and is released by `Drop`.

use nextgric_common::OctetString;
use thiserror::Error;

/// Errors raised while constructing a RAN parameter tree.
///
/// All of these are fatal to the current control request: a half-built
/// control tree has no degraded mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RanParamError {
    /// Storage for the container's children could not be reserved.
    #[error("memory exhausted reserving {requested} parameter slots")]
    Allocation {
        /// Number of child slots requested
        requested: usize,
    },

    /// More children were pushed than the container declared.
    #[error("container declared {capacity} children, attempted to add child {attempted}")]
    CapacityExceeded {
        /// Declared child count
        capacity: usize,
        /// One-based index of the offending child
        attempted: usize,
    },

    /// Fewer children were supplied than the container declared.
    #[error("container declared {capacity} children but only {filled} were set")]
    CapacityUnfilled {
        /// Declared child count
        capacity: usize,
        /// Number of children actually set
        filled: usize,
    },

    /// A container was declared with zero children.
    #[error("container declared zero children")]
    EmptyContainer,

    /// A list mixed composite and scalar members.
    #[error("list mixes composite and scalar members")]
    MixedList,
}

/// A keyed node of a parameter tree: a parameter id paired with its value.
///
/// Keyed nodes appear as structure fields and as the top-level parameters
/// of a control message. List members are unkeyed in E2SM-RC and are plain
/// [`RanParamValue`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRanParam {
    /// Parameter id from the catalog of the control action being built
    pub id: u32,
    /// Parameter value
    pub value: RanParamValue,
}

impl SeqRanParam {
    /// Creates a keyed parameter node.
    pub fn new(id: u32, value: RanParamValue) -> Self {
        Self { id, value }
    }

    /// Total node count of this parameter's subtree.
    pub fn node_count(&self) -> usize {
        self.value.node_count()
    }
}

/// A RAN parameter value: list, structure, or scalar element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RanParamValue {
    /// Ordered sequence of unkeyed members, each the same kind of value
    List(Vec<RanParamValue>),
    /// Ordered sequence of keyed fields
    Structure(Vec<SeqRanParam>),
    /// Signed integer element
    Integer(i64),
    /// Opaque byte-sequence element, immutable once constructed
    OctetString(OctetString),
}

impl RanParamValue {
    /// Creates an integer element.
    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Creates an octet-string element owning its bytes.
    pub fn octet_string(bytes: OctetString) -> Self {
        Self::OctetString(bytes)
    }

    /// Creates an octet-string element from ASCII text.
    pub fn ascii(text: &str) -> Self {
        Self::OctetString(OctetString::from_ascii(text))
    }

    /// Returns true for list and structure values.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Structure(_))
    }

    /// Returns the integer value of an integer element.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the bytes of an octet-string element.
    pub fn as_octet_string(&self) -> Option<&OctetString> {
        match self {
            Self::OctetString(os) => Some(os),
            _ => None,
        }
    }

    /// Returns the members of a list value.
    pub fn as_list(&self) -> Option<&[RanParamValue]> {
        match self {
            Self::List(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the fields of a structure value.
    pub fn as_structure(&self) -> Option<&[SeqRanParam]> {
        match self {
            Self::Structure(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up a structure field by parameter id.
    pub fn structure_field(&self, id: u32) -> Option<&RanParamValue> {
        self.as_structure()?
            .iter()
            .find(|field| field.id == id)
            .map(|field| &field.value)
    }

    /// Total number of nodes in this subtree, the value itself included.
    ///
    /// Useful for structural assertions: building and releasing a tree must
    /// account for every node exactly once, which in Rust reduces to the
    /// tree owning each node exactly once.
    pub fn node_count(&self) -> usize {
        match self {
            Self::List(members) => 1 + members.iter().map(RanParamValue::node_count).sum::<usize>(),
            Self::Structure(fields) => 1 + fields.iter().map(SeqRanParam::node_count).sum::<usize>(),
            Self::Integer(_) | Self::OctetString(_) => 1,
        }
    }
}

fn reserve<T>(capacity: usize) -> Result<Vec<T>, RanParamError> {
    if capacity == 0 {
        return Err(RanParamError::EmptyContainer);
    }
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| RanParamError::Allocation {
            requested: capacity,
        })?;
    Ok(storage)
}

/// Builder for a [`RanParamValue::List`] with a declared member count.
#[derive(Debug)]
pub struct RanParamListBuilder {
    capacity: usize,
    members: Vec<RanParamValue>,
}

impl RanParamListBuilder {
    /// Creates a list builder with `capacity` reserved member slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, RanParamError> {
        Ok(Self {
            capacity,
            members: reserve(capacity)?,
        })
    }

    /// Appends the next list member.
    ///
    /// Members of one list must all be composite or all be scalar; the
    /// schema never mixes them under a single list.
    pub fn push(&mut self, member: RanParamValue) -> Result<(), RanParamError> {
        if self.members.len() == self.capacity {
            return Err(RanParamError::CapacityExceeded {
                capacity: self.capacity,
                attempted: self.capacity + 1,
            });
        }
        if let Some(first) = self.members.first() {
            if first.is_composite() != member.is_composite() {
                return Err(RanParamError::MixedList);
            }
        }
        self.members.push(member);
        Ok(())
    }

    /// Finishes the list; every declared slot must have been filled.
    pub fn build(self) -> Result<RanParamValue, RanParamError> {
        if self.members.len() != self.capacity {
            return Err(RanParamError::CapacityUnfilled {
                capacity: self.capacity,
                filled: self.members.len(),
            });
        }
        Ok(RanParamValue::List(self.members))
    }
}

/// Builder for a [`RanParamValue::Structure`] with a declared field count.
#[derive(Debug)]
pub struct RanParamStructBuilder {
    capacity: usize,
    fields: Vec<SeqRanParam>,
}

impl RanParamStructBuilder {
    /// Creates a structure builder with `capacity` reserved field slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, RanParamError> {
        Ok(Self {
            capacity,
            fields: reserve(capacity)?,
        })
    }

    /// Appends the next structure field.
    pub fn push(&mut self, id: u32, value: RanParamValue) -> Result<(), RanParamError> {
        if self.fields.len() == self.capacity {
            return Err(RanParamError::CapacityExceeded {
                capacity: self.capacity,
                attempted: self.capacity + 1,
            });
        }
        self.fields.push(SeqRanParam::new(id, value));
        Ok(())
    }

    /// Finishes the structure; every declared slot must have been filled.
    pub fn build(self) -> Result<RanParamValue, RanParamError> {
        if self.fields.len() != self.capacity {
            return Err(RanParamError::CapacityUnfilled {
                capacity: self.capacity,
                filled: self.fields.len(),
            });
        }
        Ok(RanParamValue::Structure(self.fields))
    }
}
