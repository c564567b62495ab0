pub mod ease;
pub mod timeline;
