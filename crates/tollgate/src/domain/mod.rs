//! Domain types for the toll record store.
//!
//! This module contains the [`Entity`] contract every stored record satisfies
//! and the single concrete record type, [`Vehicle`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Contract for records held by a [`Repository`](crate::storage::Repository).
///
/// An entity has a unique, immutable identity and knows how to validate
/// itself, whether it matches a free-text query, and which label orders it in
/// search results.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identity type. Unique within a store.
    type Id: Copy + Ord + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// The entity's identity.
    fn id(&self) -> Self::Id;

    /// Check the entity's field invariants.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when a field is invalid.
    fn validate(&self) -> Result<(), String>;

    /// Returns `true` iff [`validate`](Entity::validate) succeeds.
    fn validate_entity(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether this entity matches a free-text search query.
    fn matches(&self, query: &str) -> bool;

    /// Label used to order search results (ascending).
    fn sort_key(&self) -> &str;
}

/// Unique identifier for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub i32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for VehicleId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Kind of vehicle passing the toll gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    /// Passenger bus
    Bus,

    /// Goods truck
    Truck,

    /// Private car
    Car,

    /// Motorcycle
    Motorcycle,
}

impl VehicleType {
    /// Every vehicle type, in declaration order.
    pub const ALL: [VehicleType; 4] = [Self::Bus, Self::Truck, Self::Car, Self::Motorcycle];

    /// Canonical name, as rendered by `Display` and matched by search.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Truck => "Truck",
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A toll-paying vehicle.
///
/// Every field except the identity may be changed after construction. To
/// persist a change, pass the modified copy to
/// [`Repository::update`](crate::storage::Repository::update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,

    /// License plate, the vehicle's display label
    pub license_plate: String,

    /// Vehicle category
    pub vehicle_type: VehicleType,

    /// Toll amount paid (non-negative)
    pub toll_paid: f64,
}

impl Vehicle {
    /// Create a new vehicle. No validation happens here; stores validate on write.
    pub fn new(
        id: impl Into<VehicleId>,
        license_plate: impl Into<String>,
        vehicle_type: VehicleType,
        toll_paid: f64,
    ) -> Self {
        Self {
            id: id.into(),
            license_plate: license_plate.into(),
            vehicle_type,
            toll_paid,
        }
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> VehicleId {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.license_plate.trim().is_empty() {
            return Err("License plate cannot be empty".to_string());
        }

        if self.toll_paid.is_nan() || self.toll_paid < 0.0 {
            return Err(format!(
                "Toll paid must be non-negative, got {}",
                self.toll_paid
            ));
        }

        Ok(())
    }

    /// A vehicle matches when the query is contained in its id, license plate
    /// or toll amount (case-sensitive), or is a case-insensitive prefix of its
    /// vehicle type. An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let type_name = self.vehicle_type.as_str();

        self.id.to_string().contains(query)
            || self.license_plate.contains(query)
            || type_name
                .get(..query.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(query))
            || self.toll_paid.to_string().contains(query)
    }

    fn sort_key(&self) -> &str {
        &self.license_plate
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle Info")?;
        writeln!(f, "Vehicle ID : \t{}", self.id)?;
        writeln!(f, "License Plate : \t{}", self.license_plate)?;
        writeln!(f, "Vehicle Type : \t{}", self.vehicle_type)?;
        writeln!(f, "Toll Paid : \t{}", self.toll_paid)?;
        writeln!(f, "~~~~~~~~~~~~~~~~~~~~~~")
    }
}

/// The fixed records a freshly created store starts with (ids 1-4, one per
/// vehicle type).
pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new(1, "Sylhet-Metro-1111", VehicleType::Bus, 100.0),
        Vehicle::new(2, "Chittagong-4567", VehicleType::Truck, 200.0),
        Vehicle::new(3, "Khulna-7890", VehicleType::Car, 50.0),
        Vehicle::new(4, "Rajshahi-1234", VehicleType::Motorcycle, 20.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_vehicle() {
        let vehicle = Vehicle::new(5, "Dhaka-Metro-1234", VehicleType::Car, 50.0);
        assert!(vehicle.validate_entity());
        assert_eq!(vehicle.id(), VehicleId(5));
    }

    #[rstest]
    #[case("", 10.0)]
    #[case("   ", 10.0)]
    #[case("\t\n", 0.0)]
    #[case("Dhaka-1", -0.01)]
    #[case("Dhaka-1", f64::NAN)]
    fn test_invalid_vehicle(#[case] plate: &str, #[case] toll: f64) {
        let vehicle = Vehicle::new(1, plate, VehicleType::Bus, toll);
        assert!(!vehicle.validate_entity());
        assert!(vehicle.validate().is_err());
    }

    #[test]
    fn test_zero_toll_is_valid() {
        let vehicle = Vehicle::new(1, "Free-Pass", VehicleType::Motorcycle, 0.0);
        assert!(vehicle.validate_entity());
    }

    #[rstest]
    #[case("car", true)]
    #[case("CAR", true)]
    #[case("Ca", true)]
    #[case("ar", false)]
    #[case("Cargo", false)]
    fn test_vehicle_type_prefix_match(#[case] query: &str, #[case] expected: bool) {
        let vehicle = Vehicle::new(90, "Plate", VehicleType::Car, 7.0);
        assert_eq!(vehicle.matches(query), expected);
    }

    #[test]
    fn test_plate_match_is_case_sensitive() {
        let vehicle = Vehicle::new(90, "Dhaka-Metro", VehicleType::Bus, 7.0);
        assert!(vehicle.matches("Metro"));
        assert!(!vehicle.matches("metro"));
    }

    #[test]
    fn test_id_and_amount_match_as_text() {
        let vehicle = Vehicle::new(123, "Plate", VehicleType::Truck, 45.5);
        assert!(vehicle.matches("12"));
        assert!(vehicle.matches("5.5"));
        assert!(!vehicle.matches("999"));
    }

    #[test]
    fn test_display_block() {
        let vehicle = Vehicle::new(3, "Khulna-7890", VehicleType::Car, 50.0);
        let text = vehicle.to_string();
        assert!(text.starts_with("Vehicle Info\n"));
        assert!(text.contains("Vehicle ID : \t3\n"));
        assert!(text.contains("License Plate : \tKhulna-7890\n"));
        assert!(text.contains("Vehicle Type : \tCar\n"));
        assert!(text.contains("Toll Paid : \t50\n"));
        assert!(text.ends_with("~~~~~~~~~~~~~~~~~~~~~~\n"));
    }

    #[test]
    fn test_seed_covers_every_type() {
        let seed = seed_vehicles();
        assert_eq!(seed.len(), 4);
        for vehicle_type in VehicleType::ALL {
            assert!(seed.iter().any(|v| v.vehicle_type == vehicle_type));
        }
        assert!(seed.iter().all(|v| v.validate_entity()));
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let vehicle = Vehicle::new(2, "Chittagong-4567", VehicleType::Truck, 200.0);
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["vehicle_type"], "Truck");
    }
}
