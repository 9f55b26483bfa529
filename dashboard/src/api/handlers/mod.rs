pub mod color_settings;
pub mod health;
pub mod issues;
pub mod projects;
pub mod statistics;
