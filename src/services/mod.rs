pub mod auth_service;
pub mod truck_service;
