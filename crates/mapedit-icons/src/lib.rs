//! POI icon registry and resolution for the MapEdit scenario editor.
//!
//! Map POIs reuse vehicle-class classification tags as category keys. This
//! crate maps those tags to the icon resources that represent them in the
//! editor:
//!
//! - [`VehicleClass`]: the fixed classification-tag domain
//! - [`IconKind`] / [`Icon`]: the registry's icon domain and its opaque handle
//! - [`IconRegistry`] / [`StaticIconRegistry`]: ownership of icon resources
//! - [`poi_icon`]: the tag-to-handle resolution itself
//!
//! # Example
//!
//! ```ignore
//! use mapedit_icons::{poi_icon, IconData, IconKind, StaticIconRegistry, VehicleClass};
//!
//! let registry = StaticIconRegistry::builder()
//!     .with(IconKind::Tree, IconData::new(include_bytes!("poi_tree.png"), "poi_tree"))
//!     // ... one entry per IconKind ...
//!     .build()?;
//!
//! let icon = poi_icon(&registry, VehicleClass::Ignoring)?;
//! ```

pub mod icon;
pub mod poi;
pub mod registry;
pub mod vehicle_class;

mod error;

pub use error::{Error, Result};
pub use icon::{Icon, IconData, IconKind};
pub use poi::{poi_icon, poi_icon_kind};
pub use registry::{IconRegistry, StaticIconRegistry, StaticIconRegistryBuilder};
pub use vehicle_class::VehicleClass;
