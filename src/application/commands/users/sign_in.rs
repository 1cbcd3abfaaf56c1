use super::UserCommandService;
use crate::{
    application::{
        commands::fields::require_present,
        dto::{SignInDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Login, Role, User},
};

#[derive(Debug, Clone, Default)]
pub struct SignInCommand {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn sign_in(&self, command: SignInCommand) -> ApplicationResult<SignInDto> {
        require_present([command.login.as_deref(), command.password.as_deref()])?;
        let login = Login::new(command.login.unwrap_or_default())?;
        let password = command.password.unwrap_or_default();

        let user = self.verify_credentials(&login, &password).await?;

        let token = self
            .token_manager
            .issue(TokenSubject {
                login: user.login.to_string(),
                role: Role::User,
            })
            .await?;

        self.user_repo.record_login(user.id, self.clock.now()).await?;
        tracing::info!(user_id = %user.id, "sign-in succeeded");

        Ok(SignInDto {
            name: user.first_name.into(),
            token: token.token,
        })
    }

    /// Unknown login and wrong password are indistinguishable to the caller.
    async fn verify_credentials(&self, login: &Login, password: &str) -> ApplicationResult<User> {
        let Some(user) = self.user_repo.find_by_login(login).await? else {
            tracing::info!(%login, "sign-in rejected: unknown login");
            return Err(ApplicationError::BadCredentials);
        };

        if let Err(err) = self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            tracing::info!(%login, error = %err, "sign-in rejected: password mismatch");
            return Err(ApplicationError::BadCredentials);
        }

        Ok(user)
    }
}
