//! Built-in adapters, one per supported institute.

mod busan;
mod daegu;
mod incheon;
mod seoul;

pub use busan::Busan;
pub use daegu::Daegu;
pub use incheon::Incheon;
pub use seoul::Seoul;
