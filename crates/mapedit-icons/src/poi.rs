//! POI icon resolution.
//!
//! Maps a POI's classification tag to the icon handle that represents it in
//! the editor. The mapping is fixed at definition time and deliberately
//! covers only the tags POIs actually carry; any other tag reaching the
//! resolver is a caller defect and surfaces as a hard error rather than a
//! default icon.

use crate::error::{Error, Result};
use crate::icon::{Icon, IconKind};
use crate::registry::IconRegistry;
use crate::vehicle_class::VehicleClass;

/// Resolve the icon kind for a POI classification tag.
///
/// This is the pure mapping half of [`poi_icon`], useful when only the kind
/// is needed (tooltips, attribute tables).
pub fn poi_icon_kind(class: VehicleClass) -> Result<IconKind> {
    match class {
        VehicleClass::Ignoring => Ok(IconKind::Tree),
        VehicleClass::Private => Ok(IconKind::Hotel),
        other => {
            tracing::warn!("No POI icon mapped for vehicle class '{}'", other);
            Err(Error::invalid_category(other))
        }
    }
}

/// Resolve the icon for a POI classification tag.
///
/// Looks up the icon kind for `class` and forwards it to the registry,
/// returning the registry's handle unchanged. The registry retains ownership
/// of the resource; repeated calls with the same tag return handles to the
/// same cached resource.
///
/// Fails with [`Error::InvalidCategory`] when `class` has no mapping.
pub fn poi_icon<R: IconRegistry + ?Sized>(registry: &R, class: VehicleClass) -> Result<&Icon> {
    let kind = poi_icon_kind(class)?;
    Ok(registry.get_icon(kind))
}
