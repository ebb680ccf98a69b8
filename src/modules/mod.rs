pub mod auth;
pub mod product;
pub mod user;

mod router;
pub use router::get_router;
