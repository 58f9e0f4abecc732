//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs into domain parameters, call the
//! service layer and convert the result back into DTOs.

pub mod stats;
pub mod workshop;
pub mod workshop_type;


/// Name of the bearer token security scheme in the OpenAPI document.
pub static BEARER_AUTH: &str = "bearer_auth";
