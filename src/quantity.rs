#[macro_use]
mod macros;

pub mod money;
pub mod percent;
