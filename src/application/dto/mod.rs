pub mod articles;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, CommentDto, CommentsDto, LikeStateDto};
pub use users::UserDto;
