use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, PersonName, Role, UserProfile, Username},
};

pub struct CreateUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub age: Option<u16>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

impl UserCommandService {
    /// Create a single user record. Used by the administrative bootstrap
    /// command; there is no HTTP route for it.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let username = Username::new(command.username)?;
        let profile = UserProfile {
            first_name: PersonName::new(command.first_name)?,
            last_name: PersonName::new(command.last_name)?,
            age: command.age,
            gender: command.gender,
            contact_number: command.contact_number,
            address: command.address,
        };
        validate_password(&command.password)?;

        self.ensure_identity_available(&email, &username).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            profile,
            email,
            username,
            password_hash,
            command.role,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(
            user_id = %user.id,
            name = %user.profile.full_name(),
            role = %user.role,
            "user created"
        );

        Ok(user.into())
    }

    async fn ensure_identity_available(
        &self,
        email: &Email,
        username: &Username,
    ) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "user with email {email} already exists"
            )));
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "username {username} already exists"
            )));
        }

        Ok(())
    }
}
