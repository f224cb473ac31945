//! Content module - posts, rich-text documents and the post repository

mod document;
mod post;
pub mod repository;
pub mod richtext;

pub use document::{Document, Node, NodeKind};
pub use post::{Media, Post, PostStatus, Relation, TagEntry};
pub use repository::PostRepository;
pub use richtext::{render_document, render_html, render_node, Block, HeadingLevel, ListKind};
