//! RentDesk Equipment Rental Management Core
//!
//! Inventory, rental bookings, maintenance records and a notification log
//! for a small rental business, persisted as serialized collections in a
//! local sqlite key-value store. The service layer is the external
//! interface: a presentation layer consumes the read accessors and the
//! mutation entry points directly. There is no network surface.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

pub use clock::Clock;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
