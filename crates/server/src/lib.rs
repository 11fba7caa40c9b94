pub mod state;
pub mod errors;
pub mod auth;
pub mod routes;
pub mod openapi;
pub mod startup;

pub use startup::run;
