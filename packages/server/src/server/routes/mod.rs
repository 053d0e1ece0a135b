// HTTP routes
pub mod checks;
pub mod health;
pub mod index;
pub mod sites;

pub use checks::*;
pub use health::*;
pub use index::*;
pub use sites::*;
