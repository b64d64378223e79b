//! Domain Entities

mod prompt;
mod session;
mod user;

pub use prompt::*;
pub use session::*;
pub use user::*;
