pub mod config;
pub mod question;
pub mod report;
pub mod response;
pub mod scoring;
