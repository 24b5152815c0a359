// API routes and handlers

pub mod admin;
pub mod bookings;
pub mod clients;
pub mod coaches;
pub mod feedback;
pub mod health;
pub mod response;
pub mod routes;
