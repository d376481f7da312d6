pub mod error_utils;
pub mod selectors;
pub mod store;
pub mod tasks_service;
pub mod todolists_service;

#[cfg(test)]
mod fake_api;
