// This file makes the screen modules available to the rest of the application.

pub mod address;
pub mod analytics;
pub mod block;
pub mod dashboard;
pub mod transaction;
