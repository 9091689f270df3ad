// src/application/commands/articles/mod.rs
mod comment;
mod create;
mod like;
mod service;
mod update;

pub use comment::AddCommentCommand;
pub use create::CreateArticleCommand;
pub use like::ToggleLikeCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
