//! Route definitions for the Bazaar Directory Platform

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Public directory routes; an optional bearer token widens what
        // the response contains but never gates the route
        .route("/businesses", get(handlers::list_businesses))
        .route("/businesses/:business_id", get(handlers::get_business))
        .route(
            "/businesses/:business_id/reviews",
            get(handlers::list_business_reviews),
        )
        .route("/categories", get(handlers::list_categories))
        .route("/locations", get(handlers::list_locations))
        .route("/featured", get(handlers::list_featured))
        .route("/pages/:slug", get(handlers::get_page))
        .route("/settings", get(handlers::list_settings))
        // Protected routes - authenticated users
        .nest("/businesses", business_write_routes())
        .nest("/reviews", review_routes())
        .nest("/favorites", favorite_routes())
        .nest("/profile", profile_routes())
        // Protected routes - admin panel (role checked per handler)
        .nest("/admin", admin_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
}

/// Business submission and editing (protected)
fn business_write_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::submit_business))
        .route("/:business_id", put(handlers::update_business))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Review submission (protected)
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_review))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Favorite management (protected)
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_favorites))
        .route(
            "/:business_id",
            post(handlers::add_favorite).delete(handlers::remove_favorite),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Caller's own profile (protected)
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_profile).put(handlers::update_profile))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Admin panel routes (protected, admin role re-checked in each handler)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        // Business moderation
        .route("/businesses", get(handlers::admin_list_businesses))
        .route(
            "/businesses/:business_id/status",
            put(handlers::set_business_status),
        )
        // User management
        .route("/users", get(handlers::list_users))
        .route("/users/:user_id/role", put(handlers::set_user_role))
        // Taxonomies
        .route("/categories", post(handlers::create_category))
        .route(
            "/categories/:category_id",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .route("/locations", post(handlers::create_location))
        .route(
            "/locations/:location_id",
            put(handlers::update_location).delete(handlers::delete_location),
        )
        // Featured curation
        .route(
            "/featured",
            get(handlers::admin_list_featured).post(handlers::add_featured),
        )
        .route(
            "/featured/:featured_id",
            put(handlers::update_featured).delete(handlers::remove_featured),
        )
        .route("/featured/:featured_id/reorder", post(handlers::reorder_featured))
        // Review moderation
        .route("/reviews", get(handlers::admin_list_reviews))
        .route("/reviews/:review_id", delete(handlers::delete_review))
        // Content management
        .route(
            "/pages",
            get(handlers::admin_list_pages).post(handlers::create_page),
        )
        .route(
            "/pages/:page_id",
            put(handlers::update_page).delete(handlers::delete_page),
        )
        .route("/settings/:key", put(handlers::upsert_setting))
        // Audit log
        .route("/audit", get(handlers::list_audit_log))
        .route_layer(middleware::from_fn(auth_middleware))
}
