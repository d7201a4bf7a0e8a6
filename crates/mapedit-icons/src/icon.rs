//! Icon kinds, raw icon data, and the opaque icon handle.
//!
//! [`IconData`] describes raw image bytes compiled into the binary (or
//! otherwise static for the life of the program) from which the registry
//! materializes an [`Icon`]. `Icon` itself has no public constructor: handles
//! are only obtainable from a registry, which retains ownership of the
//! underlying resource.
//!
//! # Example
//!
//! ```ignore
//! use mapedit_icons::{IconData, IconKind};
//!
//! const TREE_ICON: IconData = IconData::new(
//!     include_bytes!("../assets/poi_tree.png"),
//!     "poi_tree",
//! );
//! ```

use std::fmt;

/// Identifier for an icon resource within the registry's domain.
///
/// These are the POI marker icons the editor ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Tree marker
    Tree,
    /// Hotel marker
    Hotel,
    /// Flag marker
    Flag,
    /// Pin marker
    Pin,
    /// Nature reserve marker
    Nature,
}

impl IconKind {
    /// Get the icon name as used for asset files and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::Tree => "tree",
            IconKind::Hotel => "hotel",
            IconKind::Flag => "flag",
            IconKind::Pin => "pin",
            IconKind::Nature => "nature",
        }
    }

    /// Get all icon kinds the registry must cover.
    pub fn all() -> &'static [IconKind] {
        &[
            IconKind::Tree,
            IconKind::Hotel,
            IconKind::Flag,
            IconKind::Pin,
            IconKind::Nature,
        ]
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw icon bytes that the registry materializes an [`Icon`] from.
///
/// This is a const function-friendly descriptor, so icon assets can be
/// declared as constants with `include_bytes!`.
#[derive(Debug, Clone, Copy)]
pub struct IconData {
    /// Raw image bytes
    data: &'static [u8],
    /// Icon name for debugging/identification
    name: &'static str,
}

impl IconData {
    /// Create a new icon data descriptor.
    pub const fn new(data: &'static [u8], name: &'static str) -> Self {
        Self { data, name }
    }

    /// Get the raw image data.
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Get the icon name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the size of the raw data in bytes.
    pub const fn size(&self) -> usize {
        self.data.len()
    }
}

/// Opaque handle to a loaded icon resource.
///
/// Handles are created and owned by the registry; consumers only ever hold
/// borrowed references and never free the underlying resource. Two handles
/// compare equal exactly when they refer to the same registry resource.
#[derive(Debug, PartialEq, Eq)]
pub struct Icon {
    kind: IconKind,
    name: &'static str,
    data: &'static [u8],
}

impl Icon {
    /// Materialize a handle from raw data. Registry-internal.
    pub(crate) fn materialize(kind: IconKind, data: IconData) -> Self {
        Self {
            kind,
            name: data.name(),
            data: data.data(),
        }
    }

    /// Get the kind this icon represents.
    pub fn kind(&self) -> IconKind {
        self.kind
    }

    /// Get the icon name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the loaded image bytes.
    pub fn data(&self) -> &[u8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_data_const() {
        const TEST_DATA: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
        const TEST_ICON: IconData = IconData::new(TEST_DATA, "test");

        assert_eq!(TEST_ICON.name(), "test");
        assert_eq!(TEST_ICON.size(), 4);
    }

    #[test]
    fn test_kind_names_cover_all() {
        for kind in IconKind::all() {
            assert!(!kind.as_str().is_empty());
        }
        assert_eq!(IconKind::all().len(), 5);
    }

    #[test]
    fn test_icon_equality_tracks_resource() {
        let data = IconData::new(&[1, 2, 3], "a");
        let icon1 = Icon::materialize(IconKind::Tree, data);
        let icon2 = Icon::materialize(IconKind::Tree, data);
        let other = Icon::materialize(IconKind::Pin, IconData::new(&[4], "b"));

        assert_eq!(icon1, icon2);
        assert_ne!(icon1, other);
    }
}
