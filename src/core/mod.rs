pub mod driver;

pub use crate::domain::model::{Document, Item, Metadata};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
