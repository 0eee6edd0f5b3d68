//! Changelog document sources
//!
//! - [`traits`]: `DocumentSource` trait for loading changelog text
//! - [`local`]: Changelog file shipped with the installed package
//! - [`remote`]: Published changelog fetched over HTTP
//! - [`selector`]: Picks local or remote based on the requested version
//! - [`error`]: Source and selection failures

pub mod error;
pub mod local;
pub mod remote;
pub mod selector;
pub mod traits;

pub use error::{SelectError, SourceError};
pub use local::LocalFileSource;
pub use remote::RemoteSource;
pub use selector::SourceSelector;
pub use traits::DocumentSource;
