pub mod face;
pub mod lookup;
pub mod query;
pub mod view_model;

pub use crate::domain::model::{Card, Face, SearchPage};
pub use crate::domain::ports::{CardSource, ConfigProvider};
pub use crate::utils::error::Result;
