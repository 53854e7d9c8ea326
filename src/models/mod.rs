pub mod review;
pub mod issue;

pub use review::*;
pub use issue::*;
