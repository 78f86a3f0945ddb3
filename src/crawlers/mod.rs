pub mod categories;
pub mod crawler;
pub mod details;
pub mod pagination;
pub mod web;

#[cfg(test)]
mod tests;

pub use crawler::Fetcher;
pub use web::HttpFetcher;
