pub mod monobank;
pub mod util;

pub use monobank::MonobankProvider;
