mod handler;

pub use handler::{index, snippets_page};
