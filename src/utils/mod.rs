pub mod numeric;
mod tests;
pub mod time;

pub use time::current_time_millis;
