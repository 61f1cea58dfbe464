#[macro_use]
pub mod macros;

pub mod electrical;
pub mod percent;
pub mod rate;
pub mod time;
