pub mod types;

pub use types::{Interval, Kline};
