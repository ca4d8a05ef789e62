//! HTTP infrastructure - client trait and reqwest implementation

mod client;

pub use client::{HttpClient, HttpClientTrait};

#[cfg(test)]
pub use client::mock::{MockHttpClient, MockResponse};
