pub mod health;

use actix_web::web;

/// Plain actix routes. Registered before the Leptos page routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
}
