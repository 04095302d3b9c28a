pub mod handlers;
pub mod jwt;
pub mod protocol;
pub mod routes;
pub mod state;
