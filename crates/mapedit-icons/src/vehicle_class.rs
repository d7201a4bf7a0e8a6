//! Vehicle class classification tags.
//!
//! This module provides [`VehicleClass`], the fixed enumeration that normally
//! classifies which vehicle types may use a network element. Map POIs reuse
//! the same tags as category keys, which is why the icon resolver takes a
//! `VehicleClass` rather than a dedicated POI category type.

use std::fmt;

/// Classification tag for network elements and POIs.
///
/// The set of classes is fixed by the simulation suite's network format and
/// never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    /// Matches any class; POIs tagged with it carry no access restriction
    Ignoring,
    /// Private, non-public-service vehicles
    Private,
    /// Emergency vehicles (ambulance, fire)
    Emergency,
    /// Authority vehicles (police, customs)
    Authority,
    /// Military vehicles
    Army,
    /// VIP convoys
    Vip,
    /// Pedestrians
    Pedestrian,
    /// Ordinary passenger cars
    Passenger,
    /// Taxis
    Taxi,
    /// Urban buses
    Bus,
    /// Long-distance coaches
    Coach,
    /// Light delivery vehicles
    Delivery,
    /// Heavy trucks
    Truck,
    /// Trucks with trailers
    Trailer,
    /// Motorcycles
    Motorcycle,
    /// Mopeds
    Moped,
    /// Bicycles
    Bicycle,
    /// Electric vehicles
    EVehicle,
    /// Trams
    Tram,
    /// Heavy rail
    Rail,
    /// Ships and ferries
    Ship,
    /// Cable cars
    CableCar,
    /// Subway trains
    Subway,
    /// Aircraft
    Aircraft,
    /// First user-defined class
    Custom1,
    /// Second user-defined class
    Custom2,
}

impl VehicleClass {
    /// Get the class name as used in network files.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::Ignoring => "ignoring",
            VehicleClass::Private => "private",
            VehicleClass::Emergency => "emergency",
            VehicleClass::Authority => "authority",
            VehicleClass::Army => "army",
            VehicleClass::Vip => "vip",
            VehicleClass::Pedestrian => "pedestrian",
            VehicleClass::Passenger => "passenger",
            VehicleClass::Taxi => "taxi",
            VehicleClass::Bus => "bus",
            VehicleClass::Coach => "coach",
            VehicleClass::Delivery => "delivery",
            VehicleClass::Truck => "truck",
            VehicleClass::Trailer => "trailer",
            VehicleClass::Motorcycle => "motorcycle",
            VehicleClass::Moped => "moped",
            VehicleClass::Bicycle => "bicycle",
            VehicleClass::EVehicle => "evehicle",
            VehicleClass::Tram => "tram",
            VehicleClass::Rail => "rail",
            VehicleClass::Ship => "ship",
            VehicleClass::CableCar => "cable_car",
            VehicleClass::Subway => "subway",
            VehicleClass::Aircraft => "aircraft",
            VehicleClass::Custom1 => "custom1",
            VehicleClass::Custom2 => "custom2",
        }
    }

    /// Get all classification tags.
    pub fn all() -> &'static [VehicleClass] {
        &[
            VehicleClass::Ignoring,
            VehicleClass::Private,
            VehicleClass::Emergency,
            VehicleClass::Authority,
            VehicleClass::Army,
            VehicleClass::Vip,
            VehicleClass::Pedestrian,
            VehicleClass::Passenger,
            VehicleClass::Taxi,
            VehicleClass::Bus,
            VehicleClass::Coach,
            VehicleClass::Delivery,
            VehicleClass::Truck,
            VehicleClass::Trailer,
            VehicleClass::Motorcycle,
            VehicleClass::Moped,
            VehicleClass::Bicycle,
            VehicleClass::EVehicle,
            VehicleClass::Tram,
            VehicleClass::Rail,
            VehicleClass::Ship,
            VehicleClass::CableCar,
            VehicleClass::Subway,
            VehicleClass::Aircraft,
            VehicleClass::Custom1,
            VehicleClass::Custom2,
        ]
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
