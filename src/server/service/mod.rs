//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Role checks, input validation and lifecycle rules
//! - **Orchestration**: Coordinating multiple repository calls into one result
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod stats;
pub mod workshop;
pub mod workshop_type;
