//! HTTP request handlers for the Bazaar Directory API

pub mod admin;
pub mod auth;
pub mod business;
pub mod category;
pub mod content;
pub mod favorite;
pub mod featured;
pub mod health;
pub mod location;
pub mod profile;
pub mod review;

pub use admin::{
    add_featured, admin_list_businesses, admin_list_featured, admin_list_pages,
    admin_list_reviews, create_category, create_location, create_page, delete_category,
    delete_location, delete_page, delete_review, get_stats, list_audit_log, list_users,
    remove_featured, reorder_featured, set_business_status, set_user_role, update_category,
    update_featured, update_location, update_page, upsert_setting,
};
pub use auth::{login, refresh, register};
pub use business::{get_business, list_businesses, submit_business, update_business};
pub use category::list_categories;
pub use content::{get_page, list_settings};
pub use favorite::{add_favorite, list_favorites, remove_favorite};
pub use featured::list_featured;
pub use health::health_check;
pub use location::list_locations;
pub use profile::{get_profile, update_profile};
pub use review::{create_review, list_business_reviews};
