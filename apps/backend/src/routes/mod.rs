use actix_web::web;

pub mod balances;
pub mod goals;
pub mod health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(goals::configure_routes)
        .configure(balances::configure_routes);
}
