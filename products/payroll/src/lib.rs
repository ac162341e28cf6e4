//! Payroll module: the employee store and the startup seeder.

pub mod error;
pub mod resources;
pub mod seed;
pub mod store;

pub use entity::employee::Model as StoredEmployee;
pub use error::{PayrollError, PayrollResult};
pub use seed::{SeedLoadError, Seeder};
pub use store::{Employee, EmployeeStore, SeaOrmEmployeeStore};
