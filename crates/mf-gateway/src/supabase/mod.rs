mod client;
mod wire;

pub use client::SupabaseGateway;
pub use wire::api_error;
