pub mod config;
pub mod dns;
pub mod error;
pub mod graphql;
pub mod initialization;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validation;
