use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::geometry::Point2;

/// Family tag prefixing every carpet hole name.
pub const CARPET_TAG: &str = "Sub";
/// Family tag prefixing every triangle hole name.
pub const TRIANGLE_TAG: &str = "Sierpinski";

/// A universally unique identifier for one shape in a plan.
/// We wrap Uuid to ensure strong typing and allow for potential future
/// extension (e.g. adding generation counters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create an ID from a specific UUID (useful for restoration).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a deterministic ID based on a string seed (e.g. "carpet/0/3").
    /// UUID v5 (SHA-1) over a fixed namespace is stable across platforms.
    pub fn new_deterministic(seed: &str) -> Self {
        let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes());
        Self(uuid)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical path of child indices from the recursion root.
///
/// A path identifies one cell of the subdivision structurally, independent
/// of floating-point coordinates: `carpet/5/0` is the level-2 cell reached
/// through scan index 5 then scan index 0. The root path (no indices) is
/// the base shape itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPath {
    root: String,
    indices: Vec<u8>,
}

impl CellPath {
    pub fn root(tag: &str) -> Self {
        Self {
            root: tag.to_string(),
            indices: Vec::new(),
        }
    }

    /// The path of the child cell at `index` under this cell.
    pub fn child(&self, index: u8) -> Self {
        let mut indices = Vec::with_capacity(self.indices.len() + 1);
        indices.extend_from_slice(&self.indices);
        indices.push(index);
        Self {
            root: self.root.clone(),
            indices,
        }
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// The structural identity of this cell.
    pub fn entity_id(&self) -> EntityId {
        EntityId::new_deterministic(&self.to_string())
    }
}

impl fmt::Display for CellPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for idx in &self.indices {
            write!(f, "/{}", idx)?;
        }
        Ok(())
    }
}

/// Formats a hole name from its family tag, recursion level, and reference
/// point. Fixed four-decimal formatting keeps names deterministic across
/// platforms and locales.
pub fn hole_name(tag: &str, level: u32, reference: &Point2) -> String {
    format!(
        "{}_L{}_X{:.4}_Y{:.4}",
        tag, level, reference.x, reference.y
    )
}
