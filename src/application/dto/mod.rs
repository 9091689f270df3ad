pub mod articles;
pub mod auth;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, AuthorDto, CommentDto, LikesDto, TagsInput};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use users::UserDto;
