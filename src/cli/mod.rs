pub mod convert;
pub mod rates;
pub mod ui;
