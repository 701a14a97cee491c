//! Demo data initializer
//!
//! Seeds each collection only when its key is absent from the store, so an
//! existing data set is never overwritten. Rental and maintenance dates are
//! laid out relative to the provided date, giving a data set with one
//! running rental, one upcoming reservation, one returned rental and one
//! overdue rental out of the box.

use chrono::{Duration, NaiveDate};

use crate::{
    error::AppResult,
    models::{
        enums::{
            EquipmentCondition, EquipmentStatus, MaintenanceStatus, MaintenanceType, RentalStatus,
            Role,
        },
        equipment::Equipment,
        maintenance::Maintenance,
        rental::Rental,
        user::User,
    },
    store::Store,
};

pub async fn initialize_demo_data(store: &Store, today: NaiveDate) -> AppResult<()> {
    let _guard = store.write_guard().await;

    if !store.users.collection().exists().await? {
        store.users.collection().save(&demo_users()).await?;
        tracing::info!("seeded demo users");
    }

    if !store.equipment.collection().exists().await? {
        store.equipment.collection().save(&demo_equipment()).await?;
        tracing::info!("seeded demo equipment");
    }

    if !store.rentals.collection().exists().await? {
        store.rentals.collection().save(&demo_rentals(today)).await?;
        tracing::info!("seeded demo rentals");
    }

    if !store.maintenance.collection().exists().await? {
        store
            .maintenance
            .collection()
            .save(&demo_maintenance(today))
            .await?;
        tracing::info!("seeded demo maintenance records");
    }

    if !store.notifications.collection().exists().await? {
        store.notifications.collection().save(&[]).await?;
    }

    Ok(())
}

fn demo_users() -> Vec<User> {
    let user = |id: &str, role: Role, email: &str, password: &str, name: &str| User {
        id: id.to_string(),
        role,
        email: email.to_string(),
        password: password.to_string(),
        name: Some(name.to_string()),
    };
    vec![
        user("1", Role::Admin, "admin@entnt.in", "admin123", "Admin User"),
        user("2", Role::Staff, "staff@entnt.in", "staff123", "Staff User"),
        user("3", Role::Customer, "customer@entnt.in", "cust123", "Customer User"),
        user("4", Role::Customer, "johndoe@example.com", "pass123", "John Doe"),
        user("5", Role::Customer, "janedoe@example.com", "pass123", "Jane Doe"),
    ]
}

fn demo_equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "eq1".to_string(),
            name: "Excavator CAT 320".to_string(),
            category: "Heavy Machinery".to_string(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::Available,
            description: Some(
                "Medium-sized hydraulic excavator suitable for construction projects".to_string(),
            ),
            image_url: None,
            daily_rate: Some(1200.0),
            purchase_date: Some("2023-01-15".parse().expect("valid date")),
        },
        Equipment {
            id: "eq2".to_string(),
            name: "Concrete Mixer HM-350".to_string(),
            category: "Construction".to_string(),
            condition: EquipmentCondition::Excellent,
            status: EquipmentStatus::Rented,
            description: Some("Industrial grade concrete mixer with 350L capacity".to_string()),
            image_url: None,
            daily_rate: Some(500.0),
            purchase_date: Some("2023-06-22".parse().expect("valid date")),
        },
        Equipment {
            id: "eq3".to_string(),
            name: "Scissor Lift SL-20".to_string(),
            category: "Aerial Equipment".to_string(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::Available,
            description: Some("Electric scissor lift with 20ft maximum height".to_string()),
            image_url: None,
            daily_rate: Some(350.0),
            purchase_date: Some("2023-03-10".parse().expect("valid date")),
        },
        Equipment {
            id: "eq4".to_string(),
            name: "Generator 50kW".to_string(),
            category: "Power Equipment".to_string(),
            condition: EquipmentCondition::Fair,
            status: EquipmentStatus::Maintenance,
            description: Some("Diesel generator capable of 50kW output".to_string()),
            image_url: None,
            daily_rate: Some(800.0),
            purchase_date: Some("2022-11-05".parse().expect("valid date")),
        },
        Equipment {
            id: "eq5".to_string(),
            name: "Bulldozer D7".to_string(),
            category: "Heavy Machinery".to_string(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::Available,
            description: Some("Medium-sized bulldozer for earth moving operations".to_string()),
            image_url: None,
            daily_rate: Some(1500.0),
            purchase_date: Some("2023-02-18".parse().expect("valid date")),
        },
    ]
}

fn demo_rentals(today: NaiveDate) -> Vec<Rental> {
    let future = today + Duration::days(5);
    let past = today - Duration::days(10);
    let near_past = today - Duration::days(3);
    let near_future = today + Duration::days(2);

    vec![
        Rental {
            id: "r1".to_string(),
            equipment_id: "eq2".to_string(),
            customer_id: "3".to_string(),
            start_date: today,
            end_date: future,
            status: RentalStatus::Rented,
            notes: Some("Customer requested delivery to site".to_string()),
            total_cost: Some(2500.0),
        },
        Rental {
            id: "r2".to_string(),
            equipment_id: "eq5".to_string(),
            customer_id: "4".to_string(),
            start_date: near_future,
            end_date: future,
            status: RentalStatus::Reserved,
            notes: None,
            total_cost: Some(3000.0),
        },
        Rental {
            id: "r3".to_string(),
            equipment_id: "eq3".to_string(),
            customer_id: "5".to_string(),
            start_date: past,
            end_date: near_past,
            status: RentalStatus::Returned,
            notes: Some("Equipment returned in good condition".to_string()),
            total_cost: Some(1050.0),
        },
        Rental {
            id: "r4".to_string(),
            equipment_id: "eq1".to_string(),
            customer_id: "3".to_string(),
            start_date: near_past,
            end_date: today,
            status: RentalStatus::Overdue,
            notes: Some("Customer contacted for return".to_string()),
            total_cost: Some(3600.0),
        },
    ]
}

fn demo_maintenance(today: NaiveDate) -> Vec<Maintenance> {
    let future = today + Duration::days(7);
    let past = today - Duration::days(20);

    vec![
        Maintenance {
            id: "m1".to_string(),
            equipment_id: "eq1".to_string(),
            date: past,
            kind: MaintenanceType::RoutineCheck,
            notes: "No issues found".to_string(),
            cost: Some(150.0),
            completed_by: Some("Technician A".to_string()),
            status: Some(MaintenanceStatus::Completed),
        },
        Maintenance {
            id: "m2".to_string(),
            equipment_id: "eq4".to_string(),
            date: today,
            kind: MaintenanceType::Repair,
            notes: "Fuel line replacement needed".to_string(),
            cost: Some(350.0),
            completed_by: Some("Technician B".to_string()),
            status: Some(MaintenanceStatus::InProgress),
        },
        Maintenance {
            id: "m3".to_string(),
            equipment_id: "eq2".to_string(),
            date: future,
            kind: MaintenanceType::RoutineCheck,
            notes: "Scheduled maintenance after rental return".to_string(),
            cost: None,
            completed_by: None,
            status: Some(MaintenanceStatus::Scheduled),
        },
    ]
}
