//! Host documents: loading HTML pages and reading/writing them.
//!
//! - [`HtmlDocument`] implements the domain's
//!   [`ArticleDocument`](thinker_domain::ArticleDocument) over `scraper`
//! - [`inject_root_container`] adds the panel as one root container
//! - [`DocumentLoader`] reads a page from a URL, a file or stdin

mod html;
mod inject;
mod loader;

pub use html::HtmlDocument;
pub use inject::{ROOT_CONTAINER_ID, inject_root_container};
pub use loader::{DocumentError, DocumentLoader, DocumentSource, LoadedDocument, host_allowed};
