//! Integration tests for POI icon resolution against a populated registry.

use mapedit_icons::{
    poi_icon, Error, IconData, IconKind, IconRegistry, StaticIconRegistry, VehicleClass,
};

const TREE: IconData = IconData::new(&[0x89, 0x50, 0x4E, 0x47, 0x01], "poi_tree");
const HOTEL: IconData = IconData::new(&[0x89, 0x50, 0x4E, 0x47, 0x02], "poi_hotel");
const FLAG: IconData = IconData::new(&[0x89, 0x50, 0x4E, 0x47, 0x03], "poi_flag");
const PIN: IconData = IconData::new(&[0x89, 0x50, 0x4E, 0x47, 0x04], "poi_pin");
const NATURE: IconData = IconData::new(&[0x89, 0x50, 0x4E, 0x47, 0x05], "poi_nature");

fn registry() -> StaticIconRegistry {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    StaticIconRegistry::builder()
        .with(IconKind::Tree, TREE)
        .with(IconKind::Hotel, HOTEL)
        .with(IconKind::Flag, FLAG)
        .with(IconKind::Pin, PIN)
        .with(IconKind::Nature, NATURE)
        .build()
        .expect("registry covers all icon kinds")
}

#[test]
fn ignoring_resolves_to_tree_icon() {
    let registry = registry();
    let icon = poi_icon(&registry, VehicleClass::Ignoring).unwrap();
    assert_eq!(icon, registry.get_icon(IconKind::Tree));
    assert_eq!(icon.name(), "poi_tree");
}

#[test]
fn private_resolves_to_hotel_icon() {
    let registry = registry();
    let icon = poi_icon(&registry, VehicleClass::Private).unwrap();
    assert_eq!(icon, registry.get_icon(IconKind::Hotel));
    assert_eq!(icon.name(), "poi_hotel");
}

#[test]
fn unmapped_class_is_a_hard_error() {
    let registry = registry();
    let err = poi_icon(&registry, VehicleClass::Passenger).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCategory {
            class: VehicleClass::Passenger
        }
    ));
    assert!(err.to_string().contains("Invalid POI"));
}

#[test]
fn repeated_resolution_returns_same_resource() {
    let registry = registry();
    let first = poi_icon(&registry, VehicleClass::Ignoring).unwrap();
    let second = poi_icon(&registry, VehicleClass::Ignoring).unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn resolver_works_through_trait_object() {
    let registry = registry();
    let dynamic: &dyn IconRegistry = &registry;
    let icon = poi_icon(dynamic, VehicleClass::Private).unwrap();
    assert_eq!(icon.kind(), IconKind::Hotel);
}

#[test]
fn incomplete_registry_fails_to_build() {
    let err = StaticIconRegistry::builder()
        .with(IconKind::Tree, TREE)
        .with(IconKind::Hotel, HOTEL)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingIcon { .. }));
}
