pub mod sensor;
pub mod snapshot;
pub mod station;
