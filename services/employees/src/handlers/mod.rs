pub mod department;
pub mod employee;
pub mod form;
pub mod health;
