// Composition root: configuration, wiring of in-memory adapters into use case
// handlers, the HTTP and GraphQL surfaces and the membership sync worker.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
