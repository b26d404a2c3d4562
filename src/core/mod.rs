pub mod classifier;
pub mod query;
pub mod store;

pub use crate::domain::model::{FlowerMeasurements, Record, Snapshot, SortField, SortOrder, Species};
pub use crate::domain::ports::{ConfigProvider, PatientSource};
pub use crate::utils::error::Result;
