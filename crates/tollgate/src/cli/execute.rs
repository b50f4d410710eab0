//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use serde::Serialize;

use crate::domain::{Entity, Vehicle, VehicleId, VehicleType};
use crate::error::Error;
use crate::lifecycle::{DisposeGuard, StoreContext};
use crate::output::{self, OutputMode};
use crate::storage::Repository;

/// Id of the vehicle the demo updates and then deletes
const DEMO_UPDATE_ID: VehicleId = VehicleId(2);

/// Outcome of one run of the reference client flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    /// The vehicle the flow added
    pub added: Vehicle,
    /// The vehicle as it was after the update
    pub updated: Vehicle,
    /// Whether deleting the updated vehicle removed it
    pub deleted: bool,
    /// Synchronous search for "Dhaka"
    pub search: Vec<Vehicle>,
    /// Asynchronous search for "Car"
    pub search_async: Vec<Vehicle>,
}

/// Run the reference client flow against `repo`.
///
/// Adds vehicle 5, raises vehicle 2's toll to 100, deletes vehicle 2, then
/// searches for "Dhaka" synchronously and "Car" asynchronously. `repo` is
/// disposed when the flow ends, including when a step fails.
///
/// # Errors
///
/// Propagates any store error; a missing vehicle 2 is `Error::NotFound`.
pub async fn run_demo(repo: &mut dyn Repository<Vehicle>) -> crate::error::Result<DemoReport> {
    let mut store = DisposeGuard::new(repo);

    let added = Vehicle::new(5, "Dhaka-Metro-1234", VehicleType::Car, 50.0);
    store.add(added.clone())?;

    let mut updated = store
        .find_by_id(DEMO_UPDATE_ID)
        .cloned()
        .ok_or_else(|| Error::NotFound(DEMO_UPDATE_ID.to_string()))?;
    updated.toll_paid = 100.0;
    store.update(updated.clone())?;
    tracing::info!(id = %updated.id(), "Vehicle updated");

    let deleted = store.delete(&updated);

    let search = store.search("Dhaka");
    let search_async = store.search_async("Car").await?;

    Ok(DemoReport {
        added,
        updated,
        deleted,
        search,
        search_async,
    })
}

/// Execute the demo command
pub async fn execute_demo(context: &StoreContext, output_mode: OutputMode) -> Result<()> {
    let shared = context.store().await?;
    let mut lock = shared.write().await;
    let report = run_demo(&mut **lock).await?;

    match output_mode {
        OutputMode::Json => output::print_json(&report)?,
        OutputMode::Text => {
            output::print_message(&format!(
                "Vehicle {} updated successfully",
                report.updated.id()
            ))?;
            output::print_vehicle(&report.updated, output_mode)?;
            if report.deleted {
                output::print_message(&format!(
                    "Vehicle {} deleted successfully",
                    report.updated.id()
                ))?;
            }
            output::print_search_result("Total Vehicles found", &report.search, output_mode)?;
            output::print_search_result(
                "Total Vehicles found asynchronously",
                &report.search_async,
                output_mode,
            )?;
        }
    }

    Ok(())
}

/// Execute the list command
pub async fn execute_list(context: &StoreContext, output_mode: OutputMode) -> Result<()> {
    let shared = context.store().await?;
    let store = shared.read().await;
    output::print_vehicles(store.iter(), output_mode)?;
    Ok(())
}

/// Execute the show command
pub async fn execute_show(context: &StoreContext, id: i32, output_mode: OutputMode) -> Result<()> {
    let shared = context.store().await?;
    let store = shared.read().await;

    let vehicle = store
        .find_by_id(VehicleId(id))
        .ok_or_else(|| Error::NotFound(id.to_string()))?;
    output::print_vehicle(vehicle, output_mode)?;
    Ok(())
}

/// Execute the search command
pub async fn execute_search(
    context: &StoreContext,
    query: &str,
    run_async: bool,
    output_mode: OutputMode,
) -> Result<()> {
    let shared = context.store().await?;
    let store = shared.read().await;

    let (label, hits) = if run_async {
        (
            "Total Vehicles found asynchronously",
            store.search_async(query).await?,
        )
    } else {
        ("Total Vehicles found", store.search(query))
    };

    output::print_search_result(label, &hits, output_mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::storage::in_memory::InMemoryRepository;

    #[tokio::test]
    async fn test_run_demo_on_seeded_store() {
        let mut store = InMemoryRepository::<Vehicle>::seeded();
        let report = run_demo(&mut store).await.unwrap();

        assert_eq!(report.updated.id(), VehicleId(2));
        assert_eq!(report.updated.toll_paid, 100.0);
        assert!(report.deleted);

        assert_eq!(report.search, vec![report.added.clone()]);

        let ids: Vec<i32> = report.search_async.iter().map(|v| v.id().0).collect();
        // Plates: Dhaka-Metro-1234 (5) < Khulna-7890 (3)
        assert_eq!(ids, vec![5, 3]);

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_run_demo_without_target_disposes() {
        let mut store = InMemoryRepository::<Vehicle>::new();
        let result = run_demo(&mut store).await;

        assert!(matches!(result, Err(Error::NotFound(id)) if id == "2"));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_execute_commands_against_context() {
        let context = StoreContext::new(StoreConfig::default());

        execute_list(&context, OutputMode::Json).await.unwrap();
        execute_show(&context, 1, OutputMode::Text).await.unwrap();
        execute_search(&context, "Car", true, OutputMode::Text)
            .await
            .unwrap();
        assert!(execute_show(&context, 42, OutputMode::Text).await.is_err());
    }
}
