//! Business logic services for the Discography API
//!
//! Services sit between the route handlers and the repositories. The
//! singer and album services only validate input and delegate.

pub mod album;
pub mod health;
pub mod singer;

pub use album::{AlbumService, DefaultAlbumService};
pub use health::HealthService;
pub use singer::{DefaultSingerService, SingerService};
