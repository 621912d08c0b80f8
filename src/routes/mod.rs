pub mod auth_routes;
pub mod truck_routes;
