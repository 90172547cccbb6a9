//! Strongly-typed identifiers for simulation entities.
//!
//! Newtype wrappers prevent accidental mixing of point indices with
//! cross-section or link indices.

use serde::{Deserialize, Serialize};

/// Index into the chain's mass point storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

/// Index of a triangular cross-section along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(pub u32);

/// Index of a volumetric link. Link `l` spans cross-sections `l` and `l + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub u32);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl SectionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LinkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The two cross-sections this link spans.
    #[inline]
    pub fn sections(self) -> (SectionId, SectionId) {
        (SectionId(self.0), SectionId(self.0 + 1))
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for SectionId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for LinkId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
