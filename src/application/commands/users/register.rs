use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, Username},
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_available(&username, &email).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(username, email, PasswordHash::new(hashed)?, self.clock.now())
            .with_avatar(command.avatar)
            .with_bio(command.bio);

        // A concurrent registration can still trip the unique index.
        let user = self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(msg) => ApplicationError::conflict(msg),
            other => other.into(),
        })?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");

        Ok(user.into())
    }

    async fn ensure_available(&self, username: &Username, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }
        Ok(())
    }
}
