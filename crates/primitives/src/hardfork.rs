//! Chain revision identifiers.
#![allow(non_camel_case_types)]

pub use SpecId::*;

/// Specification IDs, ordered by mainnet activation.
///
/// Only the relative order matters to the rest of the workspace: feature
/// gates compare revisions with [`SpecId::is_enabled_in`]. Object-format
/// containers are recognized from [`SHANGHAI`] on.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, enumn::N)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecId {
    /// Frontier
    FRONTIER = 0,
    /// Frontier Thawing
    FRONTIER_THAWING,
    /// Homestead
    HOMESTEAD,
    /// DAO Fork
    DAO_FORK,
    /// Tangerine Whistle
    TANGERINE,
    /// Spurious Dragon
    SPURIOUS_DRAGON,
    /// Byzantium
    BYZANTIUM,
    /// Constantinople
    CONSTANTINOPLE,
    /// Petersburg
    PETERSBURG,
    /// Istanbul
    ISTANBUL,
    /// Muir Glacier
    MUIR_GLACIER,
    /// Berlin
    BERLIN,
    /// London
    LONDON,
    /// Arrow Glacier
    ARROW_GLACIER,
    /// Gray Glacier
    GRAY_GLACIER,
    /// Paris/Merge
    MERGE,
    /// Shanghai
    SHANGHAI,
    /// Cancun
    CANCUN,
    /// Prague
    PRAGUE,
    /// Osaka
    OSAKA,
    /// The most recent revision
    #[default]
    LATEST = u8::MAX,
}

impl SpecId {
    /// Returns the [`SpecId`] for the given [`u8`].
    #[inline]
    pub fn try_from_u8(spec_id: u8) -> Option<Self> {
        Self::n(spec_id)
    }

    /// Returns `true` if `other` is activated at this revision.
    #[inline]
    pub const fn is_enabled_in(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

impl core::fmt::Display for SpecId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}
