//! CLI command implementations.

pub mod email;
pub mod events;
pub mod migrate;

/// `DATABASE_URL`, after loading `.env` if present.
fn database_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL").ok()
}
