//! API data transfer objects.
//!
//! Request and response bodies shared by the controllers and the generated OpenAPI
//! document. Domain models in `server::model` convert into these at the controller boundary.

pub mod api;
pub mod stats;
pub mod team;
pub mod user;
pub mod workshop;
pub mod workshop_type;
