pub mod types;

pub use types::{SwitchError, SwitchResult};
