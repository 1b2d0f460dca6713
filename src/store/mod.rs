pub mod file;
pub mod queries;

pub use file::EmployeeStore;
