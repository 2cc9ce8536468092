pub mod capacity;
pub mod employee;
pub mod photo;
