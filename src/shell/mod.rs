// Composition root for the student portal.
//
// Responsibilities
// - Read config from the environment.
// - Build the in-memory stores, seeded or empty.
// - Wire stores into use case handlers and expose them over REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
