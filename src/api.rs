pub mod client;
pub mod wewantwaste;
