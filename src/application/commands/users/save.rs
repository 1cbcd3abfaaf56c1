use super::UserCommandService;
use crate::{
    application::{
        commands::fields::require_present,
        dto::UserDto,
        error::ApplicationResult,
    },
    domain::{
        errors::{DomainError, Resource, UniqueField},
        user::{
            BirthDate, Email, Login, NewUser, PersonName, Phone, RawPassword, UserId, UserUpdate,
        },
    },
};
use chrono::NaiveDate;

/// Create-or-update payload; `id` selects the mode.
#[derive(Debug, Clone, Default)]
pub struct SaveUserCommand {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

struct Profile {
    first_name: PersonName,
    last_name: PersonName,
    birth_date: BirthDate,
    email: Email,
    login: Login,
    phone: Phone,
}

impl SaveUserCommand {
    fn profile_fields(&self) -> [Option<&str>; 6] {
        [
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.birth_date.as_deref(),
            self.email.as_deref(),
            self.login.as_deref(),
            self.phone.as_deref(),
        ]
    }

    fn profile(&self, today: NaiveDate) -> ApplicationResult<Profile> {
        Ok(Profile {
            first_name: PersonName::new(self.first_name.clone().unwrap_or_default())?,
            last_name: PersonName::new(self.last_name.clone().unwrap_or_default())?,
            birth_date: BirthDate::parse(self.birth_date.as_deref().unwrap_or_default(), today)?,
            email: Email::new(self.email.as_deref().unwrap_or_default())?,
            login: Login::new(self.login.as_deref().unwrap_or_default())?,
            phone: Phone::new(self.phone.as_deref().unwrap_or_default())?,
        })
    }
}

impl UserCommandService {
    pub async fn save(&self, command: SaveUserCommand) -> ApplicationResult<UserDto> {
        match command.id {
            None => self.create_user(command).await,
            Some(id) => {
                let id = UserId::new(id).map_err(|_| DomainError::NotFound(Resource::User))?;
                self.update_user(id, command).await
            }
        }
    }

    async fn create_user(&self, command: SaveUserCommand) -> ApplicationResult<UserDto> {
        let mut required = command.profile_fields().to_vec();
        required.push(command.password.as_deref());
        require_present(required)?;

        let profile = command.profile(self.clock.today())?;
        let raw = RawPassword::new(command.password.unwrap_or_default())?;

        self.ensure_unique(&profile.login, &profile.email, None)
            .await?;

        let password_hash = self.hash_password(&raw).await?;
        let new_user = NewUser {
            first_name: profile.first_name,
            last_name: profile.last_name,
            birth_date: profile.birth_date,
            email: profile.email,
            login: profile.login,
            password_hash,
            phone: profile.phone,
            created_at: self.clock.now(),
        };

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, login = %user.login, "user created");
        Ok(user.into())
    }

    async fn update_user(&self, id: UserId, command: SaveUserCommand) -> ApplicationResult<UserDto> {
        require_present(command.profile_fields())?;
        let profile = command.profile(self.clock.today())?;

        let existing = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(Resource::User))?;

        self.ensure_unique(&profile.login, &profile.email, Some(id))
            .await?;

        let password_hash = self
            .password_for_update(&existing, command.password.as_deref())
            .await?;

        let update = UserUpdate {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            birth_date: profile.birth_date,
            email: profile.email,
            login: profile.login,
            password_hash,
            phone: profile.phone,
        };

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }

    /// Login is checked before email.
    async fn ensure_unique(
        &self,
        login: &Login,
        email: &Email,
        exclude: Option<UserId>,
    ) -> ApplicationResult<()> {
        if self
            .user_repo
            .count_by_login(login.as_str(), exclude)
            .await?
            > 0
        {
            return Err(DomainError::AlreadyExists(UniqueField::Login).into());
        }

        if self
            .user_repo
            .count_by_email(email.as_str(), exclude)
            .await?
            > 0
        {
            return Err(DomainError::AlreadyExists(UniqueField::Email).into());
        }

        Ok(())
    }
}
