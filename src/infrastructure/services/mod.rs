//! Infrastructure services

mod travel_info;

pub use travel_info::{CategoryOutcome, TravelInfoService};
