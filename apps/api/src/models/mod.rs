//! Domain models for Discography
//!
//! - Singers, identified by a client-assigned integer id
//! - Albums, each referencing one singer

pub mod album;
pub mod singer;

pub use album::{Album, AlbumId};
pub use singer::{Singer, SingerId, MAX_NAME_LENGTH};
