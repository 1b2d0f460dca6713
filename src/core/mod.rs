pub mod employees;
pub mod scheduler;

pub use employees::EmployeeLogic;
pub use scheduler::Scheduler;
