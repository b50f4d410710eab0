//! Integration tests for the shared store context and scoped disposal.

mod common;

use common::dhaka_metro;
use std::sync::Arc;
use tollgate::cli::run_demo;
use tollgate::config::StoreConfig;
use tollgate::domain::{Entity, VehicleId};
use tollgate::lifecycle::{DisposeGuard, StoreContext};

#[tokio::test]
async fn test_context_shares_one_seeded_store() {
    let context = StoreContext::new(StoreConfig::default());

    let writer = context.store().await.unwrap();
    writer.write().await.add(dhaka_metro()).unwrap();

    let reader = context.store().await.unwrap();
    assert!(Arc::ptr_eq(&writer, &reader));

    let store = reader.read().await;
    assert_eq!(store.len(), 5);
    assert_eq!(store.search("Dhaka").len(), 1);
}

#[tokio::test]
async fn test_demo_flow_through_context() {
    let context = StoreContext::new(StoreConfig::default());
    let shared = context.store().await.unwrap();

    let report = {
        let mut lock = shared.write().await;
        run_demo(&mut **lock).await.unwrap()
    };

    assert_eq!(report.added, dhaka_metro());
    assert_eq!(report.updated.id(), VehicleId(2));
    assert!(report.deleted);
    assert_eq!(report.search.len(), 1);

    // The flow runs inside a dispose scope
    assert!(shared.read().await.is_empty());
}

#[tokio::test]
async fn test_guard_on_shared_store_clears_for_all_handles() {
    let context = StoreContext::new(StoreConfig::default());
    let shared = context.store().await.unwrap();

    {
        let mut lock = shared.write().await;
        let store = DisposeGuard::new(&mut **lock);
        assert!(store.find_by_id(VehicleId(1)).is_some());
    }

    let again = context.store().await.unwrap();
    assert!(again.read().await.is_empty());
}
