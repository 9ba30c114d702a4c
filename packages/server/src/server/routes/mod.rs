// HTTP routes
pub mod error;
pub mod fact_check;
pub mod health;
pub mod history;

pub use error::*;
pub use fact_check::*;
pub use health::*;
pub use history::*;
