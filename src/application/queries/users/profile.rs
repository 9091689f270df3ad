use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
