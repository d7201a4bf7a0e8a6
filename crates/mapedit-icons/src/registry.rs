//! Icon registry.
//!
//! The registry owns every icon resource the editor uses. Consumers borrow
//! handles through [`IconRegistry::get_icon`]; they never own or free one.
//! [`StaticIconRegistry`] is the shipped implementation: it is constructed
//! total over [`IconKind`], so lookups are infallible, and it materializes
//! each icon lazily on first access.
//!
//! # Example
//!
//! ```ignore
//! use mapedit_icons::{IconData, IconKind, StaticIconRegistry};
//!
//! let registry = StaticIconRegistry::builder()
//!     .with(IconKind::Tree, TREE_DATA)
//!     .with(IconKind::Hotel, HOTEL_DATA)
//!     .with(IconKind::Flag, FLAG_DATA)
//!     .with(IconKind::Pin, PIN_DATA)
//!     .with(IconKind::Nature, NATURE_DATA)
//!     .build()?;
//!
//! let icon = registry.get_icon(IconKind::Tree);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::icon::{Icon, IconData, IconKind};

/// Source of icon handles.
///
/// Implementations must be total over [`IconKind`] before any consumer calls
/// [`get_icon`](IconRegistry::get_icon); the lookup itself is infallible.
pub trait IconRegistry {
    /// Get the handle for an icon kind.
    ///
    /// The registry retains ownership; the returned reference is valid for
    /// as long as the registry is. Repeated calls with the same kind return
    /// references to the same underlying resource.
    fn get_icon(&self, kind: IconKind) -> &Icon;
}

/// Registered but not yet materialized icon.
struct Entry {
    data: IconData,
    icon: OnceLock<Icon>,
}

/// Registry with a fixed icon set, materialized lazily on first access.
pub struct StaticIconRegistry {
    entries: HashMap<IconKind, Entry>,
}

impl StaticIconRegistry {
    /// Start building a registry.
    pub fn builder() -> StaticIconRegistryBuilder {
        StaticIconRegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// Get the number of registered icon kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IconRegistry for StaticIconRegistry {
    fn get_icon(&self, kind: IconKind) -> &Icon {
        // Totality over IconKind is enforced by the builder.
        let entry = &self.entries[&kind];
        entry.icon.get_or_init(|| {
            tracing::debug!("Materializing icon '{}' ({} bytes)", kind, entry.data.size());
            Icon::materialize(kind, entry.data)
        })
    }
}

impl std::fmt::Debug for StaticIconRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticIconRegistry")
            .field("kinds", &self.entries.len())
            .finish()
    }
}

/// Builder for [`StaticIconRegistry`].
///
/// Collects one [`IconData`] per [`IconKind`]; [`build`](Self::build) fails
/// unless every kind is registered exactly once.
pub struct StaticIconRegistryBuilder {
    entries: Vec<(IconKind, IconData)>,
}

impl StaticIconRegistryBuilder {
    /// Register icon data for a kind (builder pattern).
    pub fn with(mut self, kind: IconKind, data: IconData) -> Self {
        self.entries.push((kind, data));
        self
    }

    /// Build the registry, checking coverage of the full [`IconKind`] domain.
    pub fn build(self) -> Result<StaticIconRegistry> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (kind, data) in self.entries {
            let previous = entries.insert(
                kind,
                Entry {
                    data,
                    icon: OnceLock::new(),
                },
            );
            if previous.is_some() {
                return Err(Error::duplicate_icon(kind));
            }
        }

        for kind in IconKind::all() {
            if !entries.contains_key(kind) {
                return Err(Error::missing_icon(*kind));
            }
        }

        Ok(StaticIconRegistry { entries })
    }
}
