pub mod client;
pub mod models;

pub use client::{ApiError, PlaceholderClient, PostDirectory, DEFAULT_BASE_URL};
pub use models::{Comment, Company, Post, User};
