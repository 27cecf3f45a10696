pub mod attendance;
pub mod employee;
pub mod overview;
pub mod welcome;
