//! Persistence layout, malformed-data recovery, seeding and dashboard stats

use rentdesk::{
    models::enums::{EquipmentStatus, RentalStatus},
    seed,
};

use crate::common::{booking, date, new_equipment, setup};

#[tokio::test]
async fn missing_collection_reads_as_empty() {
    let (store, services) = setup().await;

    assert!(!store.rentals.collection().exists().await.unwrap());
    assert!(services.rentals.list().await.unwrap().is_empty());
    assert!(store.rentals.collection().load_error().is_none());
}

#[tokio::test]
async fn malformed_collection_reads_as_empty_and_is_flagged() {
    let (store, services) = setup().await;

    sqlx::query("INSERT INTO collections (name, data) VALUES ('rentals', 'not json')")
        .execute(&store.pool)
        .await
        .unwrap();

    // Reads as empty instead of failing, and the damage is recorded.
    assert!(services.rentals.list().await.unwrap().is_empty());
    assert!(store.rentals.collection().load_error().is_some());

    // The other collections are unaffected.
    assert!(services.equipment.list().await.unwrap().is_empty());
    assert!(store.equipment.collection().load_error().is_none());
}

#[tokio::test]
async fn persisted_layout_uses_camel_case_keys() {
    let (store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(100.0)))
        .await
        .unwrap();
    services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-03", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("booking should be accepted");

    let equipment_json: String =
        sqlx::query_scalar("SELECT data FROM collections WHERE name = 'equipment'")
            .fetch_one(&store.pool)
            .await
            .unwrap();
    assert!(equipment_json.contains("\"dailyRate\":100.0"));

    let rentals_json: String =
        sqlx::query_scalar("SELECT data FROM collections WHERE name = 'rentals'")
            .fetch_one(&store.pool)
            .await
            .unwrap();
    assert!(rentals_json.contains("\"equipmentId\""));
    assert!(rentals_json.contains("\"startDate\":\"2024-03-01\""));
    assert!(rentals_json.contains("\"totalCost\":300.0"));
}

#[tokio::test]
async fn seeding_only_fills_absent_collections() {
    let (store, services) = setup().await;
    let today = date("2024-03-10");

    seed::initialize_demo_data(&store, today).await.unwrap();
    assert_eq!(services.users.list().await.unwrap().len(), 5);
    assert_eq!(services.equipment.list().await.unwrap().len(), 5);
    assert_eq!(services.rentals.list().await.unwrap().len(), 4);
    assert_eq!(services.maintenance.list().await.unwrap().len(), 3);

    // A second run never overwrites existing data.
    services.equipment.delete("eq3").await.unwrap();
    seed::initialize_demo_data(&store, today).await.unwrap();
    assert_eq!(services.equipment.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn seeded_credentials_authenticate() {
    let (store, services) = setup().await;
    seed::initialize_demo_data(&store, date("2024-03-10")).await.unwrap();

    let admin = services
        .users
        .authenticate("admin@entnt.in", "admin123")
        .await
        .unwrap()
        .expect("admin should authenticate");
    assert_eq!(admin.email, "admin@entnt.in");

    assert!(services
        .users
        .authenticate("admin@entnt.in", "wrong")
        .await
        .unwrap()
        .is_none());
    assert!(services
        .users
        .authenticate("nobody@entnt.in", "admin123")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn dashboard_reflects_seeded_data() {
    let (store, services) = setup().await;
    seed::initialize_demo_data(&store, date("2024-03-10")).await.unwrap();

    let stats = services.stats.dashboard().await.unwrap();
    assert_eq!(stats.total_equipment, 5);
    assert_eq!(stats.available_equipment, 3);
    assert_eq!(stats.rented_equipment, 1);
    assert_eq!(stats.maintenance_equipment, 1);
    assert_eq!(stats.availability_rate, 60);
    // One rented, one reserved, one overdue
    assert_eq!(stats.active_rentals, 3);
    assert_eq!(stats.overdue_rentals, 1);
    // Only the scheduled future check counts as upcoming
    assert_eq!(stats.upcoming_maintenance, 1);
    // Customers 3 and 4 hold the rented and reserved rentals
    assert_eq!(stats.active_customers, 2);
}
