mod error;
mod gateway;
mod memory;
mod session;
mod supabase;

#[cfg(test)]
mod tests;

pub use error::{GatewayError, Result as GatewayResult};
pub use gateway::Gateway;
pub use memory::{MemoryGateway, Operation};
pub use session::{AuthContext, Session};
pub use supabase::{SupabaseGateway, api_error};
