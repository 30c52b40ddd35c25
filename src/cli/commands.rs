pub mod check_assets;
pub mod serve;

pub use check_assets::check_assets;
pub use serve::serve;
