//! HTML template rendering handlers for the web page.

mod signature;

pub use signature::signature_page_handler;
