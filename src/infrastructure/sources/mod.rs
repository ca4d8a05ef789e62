//! Source adapters - connectors to the upstream travel-information feeds

mod country_api;
mod safety_feed;

pub use country_api::CountryApiSource;
pub use safety_feed::SafetyFeedSource;
