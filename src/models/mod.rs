pub mod candidate;
pub mod communication;
pub mod note;
pub mod reporting;
pub mod supplier;
pub mod user;
