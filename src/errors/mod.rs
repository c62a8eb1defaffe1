pub mod types;

pub use types::A11yError;
