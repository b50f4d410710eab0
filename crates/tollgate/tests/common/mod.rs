//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};
use tollgate::domain::{Vehicle, VehicleType};
use tollgate::storage::in_memory::InMemoryRepository;

/// A store holding the four seed records.
pub fn seeded_store() -> InMemoryRepository<Vehicle> {
    InMemoryRepository::seeded()
}

/// The vehicle the reference client flow adds.
pub fn dhaka_metro() -> Vehicle {
    Vehicle::new(5, "Dhaka-Metro-1234", VehicleType::Car, 50.0)
}

/// Plates of `vehicles`, in order.
pub fn plates(vehicles: &[Vehicle]) -> Vec<String> {
    vehicles.iter().map(|v| v.license_plate.clone()).collect()
}

/// Run the tollgate binary in the specified directory
pub fn run_tollgate_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tollgate"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute tollgate binary")
}
