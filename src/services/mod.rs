pub use catalog::*;

mod catalog;
