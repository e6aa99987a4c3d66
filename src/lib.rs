//! Core logic for the Snowman Studio site.
//!
//! The pages themselves are plain presentation; everything with actual
//! state or validation lives here so it can be tested without a renderer:
//!
//! - [`catalog`]: the `games.json` content model and its filters
//! - [`carousel`]: bounded sliding-window state for the featured strip
//! - [`gallery`]: circular media selection on the game detail page
//! - [`forms`]: newsletter/contact validation and the `MailProvider` seam
//! - [`brevo`]: the production Brevo REST implementation of that seam
//! - [`config`]: TOML + environment configuration, loaded once at startup

pub mod brevo;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod gallery;

pub use carousel::CarouselController;
pub use catalog::{GameCatalog, GameRecord, MediaItem, MediaKind};
pub use error::SiteError;
pub use forms::{FormGateway, FormResult, MailProvider, SubmissionState};
pub use gallery::MediaGalleryController;
