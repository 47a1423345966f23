pub mod catalog;
pub mod scan;
pub mod world;

pub use crate::domain::model::{Package, ScanReport};
pub use crate::domain::ports::{Catalog, ScanTrigger};
pub use crate::utils::error::Result;
