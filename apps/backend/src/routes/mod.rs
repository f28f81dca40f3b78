use actix_web::web;

pub mod games;
pub mod health;
pub mod leaderboard;

/// Register every application route.
///
/// Middleware is applied by the caller (`main.rs` or the test app builder).
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game routes: /game/**
    cfg.service(web::scope("/game").configure(games::configure_routes));

    // Leaderboard routes: /leaderboard/**
    cfg.service(web::scope("/leaderboard").configure(leaderboard::configure_routes));
}
