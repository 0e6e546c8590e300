pub mod import;
pub mod selector;

pub use import::{import_coupons, ImportError, ImportReport};
pub use selector::{select_random_coupon, SelectError};
