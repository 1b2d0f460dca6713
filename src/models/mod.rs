pub mod employee;
pub mod employment;
pub mod role;
pub mod schedule;
pub mod workday;

pub use employee::Employee;
pub use employment::Employment;
pub use role::Role;
pub use workday::WorkDay;
