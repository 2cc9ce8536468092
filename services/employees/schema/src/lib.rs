//! sea-orm entities for the employees service.

pub mod departments;
pub mod employees;
