pub mod auth_dto;
pub mod candidate_dto;
pub mod supplier_dto;
