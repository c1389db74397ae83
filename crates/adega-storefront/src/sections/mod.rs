//! Static sections of the home page.

mod accessibility;
mod banner;
mod header;
mod plans;
mod wineshare;

pub use accessibility::*;
pub use banner::*;
pub use header::*;
pub use plans::*;
pub use wineshare::*;
