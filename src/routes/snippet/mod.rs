mod handler;
mod model;

pub use handler::{create_snippet, delete_snippet, get_snippet, list_snippets};
