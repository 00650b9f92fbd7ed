//! Database repository layer for Discography
//!
//! Each entity gets a trait describing its persistence operations and one
//! PostgreSQL implementation. Services depend on the trait, so tests can
//! substitute an in-memory double.

pub mod album;
pub mod singer;

pub use album::{AlbumRepository, PgAlbumRepository};
pub use singer::{PgSingerRepository, SingerRepository};
