pub mod api;
pub mod builder;
pub mod components;
pub mod execution;
pub mod graph;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
