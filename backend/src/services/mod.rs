//! Business logic services for the Bazaar Directory Platform

pub mod access;
pub mod admin;
pub mod auth;
pub mod business;
pub mod category;
pub mod content;
pub mod favorite;
pub mod featured;
pub mod location;
pub mod profile;
pub mod review;

pub use access::AccessService;
pub use admin::AdminService;
pub use auth::AuthService;
pub use business::BusinessService;
pub use category::CategoryService;
pub use content::ContentService;
pub use favorite::FavoriteService;
pub use featured::FeaturedService;
pub use location::LocationService;
pub use profile::ProfileService;
pub use review::ReviewService;
