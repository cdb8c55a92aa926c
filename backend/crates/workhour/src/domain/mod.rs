//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (SessionRecord, WorkEntry, User)
//! - Domain value objects (WorkHours, DateRange)
//! - Domain services (weekly averaging)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
