pub use booking_request::*;
pub use guide_store::*;
pub use tour::*;

mod booking_request;
mod guide_store;
mod tour;
