//! Page assembly for a static personal website: JSON content documents are fetched, matched
//! to the page being served, and rendered into the page's placeholder elements.

pub mod config;
pub mod dom;
pub mod domain;
pub mod features;
pub mod filter;
pub mod render;
pub mod resolver;
pub mod services;
pub mod store;
pub mod templates;

#[cfg(test)]
mod tests;
