//! Overdue sweep passes

use rentdesk::models::enums::{EquipmentStatus, RentalStatus};

use crate::common::{booking, date, new_equipment, setup};

#[tokio::test]
async fn sweep_promotes_expired_rented_rentals() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(100.0)))
        .await
        .unwrap();
    let rental = services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-09", RentalStatus::Rented))
        .await
        .unwrap()
        .expect("booking should be accepted");

    let transitioned = services.sweep.sweep_overdue(date("2024-03-10")).await.unwrap();
    assert_eq!(transitioned, vec![rental.id.clone()]);

    let rental = services.rentals.get_by_id(&rental.id).await.unwrap();
    assert_eq!(rental.status, RentalStatus::Overdue);

    // An overdue rental still holds the equipment.
    let equipment = services.equipment.get_by_id(&equipment.id).await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Rented);

    let notifications = services.notifications.list().await.unwrap();
    assert!(notifications
        .iter()
        .any(|n| n.title == "Rental Overdue"
            && n.message == format!("Rental ID: {} is now overdue", rental.id)));
}

#[tokio::test]
async fn sweep_is_idempotent() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Bulldozer D7", EquipmentStatus::Available, Some(1500.0)))
        .await
        .unwrap();
    services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-05", RentalStatus::Rented))
        .await
        .unwrap()
        .expect("booking should be accepted");

    let first = services.sweep.sweep_overdue(date("2024-03-10")).await.unwrap();
    assert_eq!(first.len(), 1);

    let second = services.sweep.sweep_overdue(date("2024-03-10")).await.unwrap();
    assert!(second.is_empty());

    let before = services.notifications.list().await.unwrap().len();
    let third = services.sweep.sweep_overdue(date("2024-03-10")).await.unwrap();
    assert!(third.is_empty());
    assert_eq!(services.notifications.list().await.unwrap().len(), before);
}

#[tokio::test]
async fn sweep_skips_reservations_and_running_rentals() {
    let (_store, services) = setup().await;
    let reserved_eq = services
        .equipment
        .create(new_equipment("Scissor Lift SL-20", EquipmentStatus::Available, Some(350.0)))
        .await
        .unwrap();
    let running_eq = services
        .equipment
        .create(new_equipment("Concrete Mixer HM-350", EquipmentStatus::Available, Some(500.0)))
        .await
        .unwrap();

    // A lapsed reservation is not the sweep's business.
    let reservation = services
        .rentals
        .create(booking(&reserved_eq.id, "2024-03-01", "2024-03-05", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("booking should be accepted");
    // A rental ending today is not yet overdue.
    let running = services
        .rentals
        .create(booking(&running_eq.id, "2024-03-08", "2024-03-10", RentalStatus::Rented))
        .await
        .unwrap()
        .expect("booking should be accepted");

    let transitioned = services.sweep.sweep_overdue(date("2024-03-10")).await.unwrap();
    assert!(transitioned.is_empty());

    assert_eq!(
        services.rentals.get_by_id(&reservation.id).await.unwrap().status,
        RentalStatus::Reserved
    );
    assert_eq!(
        services.rentals.get_by_id(&running.id).await.unwrap().status,
        RentalStatus::Rented
    );
}
