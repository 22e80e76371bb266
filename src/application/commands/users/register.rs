use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::RegisteredUserDto, error::ApplicationResult},
    domain::user::{NewUser, PasswordHash, PersonName, Username},
};

pub struct RegisterUserCommand {
    pub fname: String,
    pub lname: String,
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> ApplicationResult<RegisteredUserDto> {
        let fname = PersonName::new(command.fname)?;
        let lname = PersonName::new(command.lname)?;
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(fname, lname, username, password_hash, created_at);

        // Username uniqueness is the store's constraint; a duplicate write
        // comes back as a conflict through the repository error mapping.
        let user = self.user_repo.insert(new_user).await?;

        Ok(user.into())
    }
}
