//! Domain models for the Bazaar Directory platform

mod business;
mod category;
mod content;
mod featured;
mod location;
mod profile;
mod review;

pub use business::*;
pub use category::*;
pub use content::*;
pub use featured::*;
pub use location::*;
pub use profile::*;
pub use review::*;
