pub mod auth_service;
pub mod candidate_service;
pub mod stats_service;
pub mod supplier_service;
