pub mod errors;
pub mod middleware;
pub mod profile;
pub mod server;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod tests;
