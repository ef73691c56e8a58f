pub mod applications;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod jobs;
pub mod pages;
pub mod profile;
