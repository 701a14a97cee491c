//! Booking creation: cost derivation, eligibility and conflict rejection

use rentdesk::{
    error::AppError,
    models::enums::{EquipmentStatus, RentalStatus},
    models::rental::UpdateRental,
};

use crate::common::{booking, date, new_equipment, setup};

#[tokio::test]
async fn booking_derives_cost_and_reserves_equipment() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(100.0)))
        .await
        .unwrap();

    let rental = services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-03", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("booking should be accepted");

    // Three inclusive days at 100 per day
    assert_eq!(rental.total_cost, Some(300.0));
    assert_eq!(rental.status, RentalStatus::Reserved);

    let equipment = services.equipment.get_by_id(&equipment.id).await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Reserved);

    let notifications = services.notifications.list().await.unwrap();
    assert!(notifications.iter().any(|n| n.title == "Rental Created"));
}

#[tokio::test]
async fn rented_booking_marks_equipment_rented() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Bulldozer D7", EquipmentStatus::Available, Some(1500.0)))
        .await
        .unwrap();

    services
        .rentals
        .create(booking(&equipment.id, "2024-03-10", "2024-03-12", RentalStatus::Rented))
        .await
        .unwrap()
        .expect("booking should be accepted");

    let equipment = services.equipment.get_by_id(&equipment.id).await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Rented);
}

#[tokio::test]
async fn overlapping_booking_is_rejected() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Scissor Lift SL-20", EquipmentStatus::Available, Some(350.0)))
        .await
        .unwrap();

    services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-03", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("first booking should be accepted");

    // Shares the boundary day with the first booking; ranges are inclusive.
    let rejected = services
        .rentals
        .create(booking(&equipment.id, "2024-03-03", "2024-03-05", RentalStatus::Reserved))
        .await
        .unwrap();
    assert!(rejected.is_none());

    let rentals = services.rentals.list().await.unwrap();
    assert_eq!(rentals.len(), 1);

    let notifications = services.notifications.list().await.unwrap();
    assert_eq!(notifications[0].title, "Date Conflict");

    // A disjoint range on the same equipment is still bookable.
    let accepted = services
        .rentals
        .create(booking(&equipment.id, "2024-03-04", "2024-03-05", RentalStatus::Reserved))
        .await
        .unwrap();
    assert!(accepted.is_some());
}

#[tokio::test]
async fn booking_rejected_when_equipment_unavailable() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Generator 50kW", EquipmentStatus::Maintenance, Some(800.0)))
        .await
        .unwrap();

    let rejected = services
        .rentals
        .create(booking(&equipment.id, "2024-03-11", "2024-03-12", RentalStatus::Reserved))
        .await
        .unwrap();
    assert!(rejected.is_none());

    let notifications = services.notifications.list().await.unwrap();
    assert_eq!(notifications[0].title, "Equipment Unavailable");
    assert_eq!(notifications[0].message, "This Generator 50kW is currently maintenance");
}

#[tokio::test]
async fn booking_rejected_for_unknown_equipment() {
    let (_store, services) = setup().await;

    let rejected = services
        .rentals
        .create(booking("eq404", "2024-03-11", "2024-03-12", RentalStatus::Reserved))
        .await
        .unwrap();
    assert!(rejected.is_none());

    let notifications = services.notifications.list().await.unwrap();
    assert_eq!(notifications[0].title, "Error Creating Rental");
    assert_eq!(notifications[0].message, "Equipment not found");
}

#[tokio::test]
async fn booking_with_reversed_dates_is_a_validation_error() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(100.0)))
        .await
        .unwrap();

    let err = services
        .rentals
        .create(booking(&equipment.id, "2024-03-05", "2024-03-01", RentalStatus::Reserved))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Rejected before touching the store
    assert!(services.rentals.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_daily_rate_is_a_validation_error() {
    let (_store, services) = setup().await;

    let err = services
        .equipment
        .create(new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(-5.0)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn invalid_image_url_is_a_validation_error() {
    let (_store, services) = setup().await;

    let mut data = new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(100.0));
    data.image_url = Some("not a url".to_string());

    let err = services.equipment.create(data).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn booking_without_daily_rate_has_no_cost() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Hand Trowel", EquipmentStatus::Available, None))
        .await
        .unwrap();

    let rental = services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-03", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("booking should be accepted");
    assert_eq!(rental.total_cost, None);
}

#[tokio::test]
async fn one_sided_date_update_cannot_invert_the_range() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Excavator CAT 320", EquipmentStatus::Available, Some(100.0)))
        .await
        .unwrap();
    let rental = services
        .rentals
        .create(booking(&equipment.id, "2024-03-05", "2024-03-07", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("booking should be accepted");

    // Pulling the end date before the stored start date is a validation
    // error even though the payload on its own carries only one date.
    let err = services
        .rentals
        .update(
            &rental.id,
            UpdateRental {
                end_date: Some(date("2024-03-01")),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Same for pushing the start date past the stored end date.
    let err = services
        .rentals
        .update(
            &rental.id,
            UpdateRental {
                start_date: Some(date("2024-03-09")),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let unchanged = services.rentals.get_by_id(&rental.id).await.unwrap();
    assert_eq!(unchanged.start_date, date("2024-03-05"));
    assert_eq!(unchanged.end_date, date("2024-03-07"));
    assert_eq!(unchanged.total_cost, Some(300.0));
}

#[tokio::test]
async fn reactivating_a_cancelled_rental_rechecks_conflicts() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Bulldozer D7", EquipmentStatus::Available, Some(1500.0)))
        .await
        .unwrap();

    let first = services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-05", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("first booking should be accepted");
    services
        .rentals
        .update_status(&first.id, RentalStatus::Cancelled)
        .await
        .unwrap();

    // The cancelled range is free again.
    let second = services
        .rentals
        .create(booking(&equipment.id, "2024-03-02", "2024-03-06", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("second booking should be accepted");

    // Bringing the cancelled rental back would overlap the new one.
    let revived = services
        .rentals
        .update_status(&first.id, RentalStatus::Reserved)
        .await
        .unwrap();
    assert!(!revived);
    assert_eq!(
        services.rentals.get_by_id(&first.id).await.unwrap().status,
        RentalStatus::Cancelled
    );
    let notifications = services.notifications.list().await.unwrap();
    assert_eq!(notifications[0].title, "Date Conflict");

    // Once the overlap is gone the reactivation goes through.
    services
        .rentals
        .update_status(&second.id, RentalStatus::Cancelled)
        .await
        .unwrap();
    let revived = services
        .rentals
        .update_status(&first.id, RentalStatus::Reserved)
        .await
        .unwrap();
    assert!(revived);
    assert_eq!(
        services.rentals.get_by_id(&first.id).await.unwrap().status,
        RentalStatus::Reserved
    );
}

#[tokio::test]
async fn date_change_recomputes_cost_and_rechecks_conflicts() {
    let (_store, services) = setup().await;
    let equipment = services
        .equipment
        .create(new_equipment("Concrete Mixer HM-350", EquipmentStatus::Available, Some(100.0)))
        .await
        .unwrap();

    let first = services
        .rentals
        .create(booking(&equipment.id, "2024-03-01", "2024-03-03", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("first booking should be accepted");
    let second = services
        .rentals
        .create(booking(&equipment.id, "2024-03-05", "2024-03-06", RentalStatus::Reserved))
        .await
        .unwrap()
        .expect("second booking should be accepted");

    // Moving the second booking onto the first is rejected and nothing changes.
    let moved = services
        .rentals
        .update(
            &second.id,
            UpdateRental {
                start_date: Some(date("2024-03-03")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!moved);
    let unchanged = services.rentals.get_by_id(&second.id).await.unwrap();
    assert_eq!(unchanged.start_date, date("2024-03-05"));
    assert_eq!(unchanged.total_cost, Some(200.0));

    // Extending it into free dates re-derives the cost.
    let extended = services
        .rentals
        .update(
            &second.id,
            UpdateRental {
                end_date: Some(date("2024-03-07")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(extended);
    let updated = services.rentals.get_by_id(&second.id).await.unwrap();
    assert_eq!(updated.total_cost, Some(300.0));

    // Editing a rental's own dates never conflicts with itself.
    let shifted = services
        .rentals
        .update(
            &first.id,
            UpdateRental {
                start_date: Some(date("2024-03-02")),
                end_date: Some(date("2024-03-04")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(shifted);
}
