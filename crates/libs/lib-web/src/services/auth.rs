//! # Auth Service
//!
//! Registration and login.
//!
//! Login failures are reported to clients as one indistinguishable
//! `Unauthorized("Email or password is incorrect")`. The precise reason
//! ([`LoginFailure`]) is kept for the audit log. Every refused login runs one
//! argon2 verification, so response time does not reveal whether the email
//! belongs to an active account.

use std::sync::LazyLock;

use lib_auth::{hash_password, verify_password, TokenService};
use lib_core::dto::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use lib_core::model::store::models::{User, UserForCreate};
use lib_core::model::store::UserRepository;
use lib_core::{AppError, DbPool, Result};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use super::unique_conflict;

const USER_EXISTS: &str = "A user with this email or username already exists";
const INVALID_CREDENTIALS: &str = "Email or password is incorrect";

/// Digest checked in place of a stored one when there is no usable account.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("placeholder-login-secret").ok());

fn verify_against_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

/// Why a login attempt was refused. Never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginFailure {
    #[error("no active account with this email")]
    UnknownEmail,
    #[error("account is disabled")]
    AccountDisabled,
    #[error("password does not match")]
    WrongPassword,
}

#[derive(Clone)]
pub struct AuthService {
    db: DbPool,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(db: DbPool, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Create an account and sign the new user in.
    #[instrument(skip(self, req), fields(email = %req.email, username = %req.username))]
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse> {
        req.validate()?;

        // One combined check so the caller cannot tell which field collided
        if UserRepository::find_by_email_or_username(&self.db, &req.email, &req.username)
            .await?
            .is_some()
        {
            warn!("[REGISTER] Email or username already taken");
            return Err(AppError::Conflict(USER_EXISTS.to_string()));
        }

        debug!("[REGISTER] Hashing password...");
        let password_hash = hash_password(&req.password).map_err(|e| {
            error!("[REGISTER] Password hashing failed: {}", e);
            AppError::Internal(e.to_string())
        })?;

        let user = UserRepository::create(
            &self.db,
            UserForCreate {
                email: req.email,
                username: req.username,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
            },
        )
        .await
        .map_err(|e| unique_conflict(e, USER_EXISTS))?;

        let token = self.issue_token(&user)?;

        info!("[REGISTER] User created (id: {})", user.id);

        Ok(AuthResponse {
            token,
            user: UserInfo::from(user),
        })
    }

    /// Authenticate with email and password.
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        req.validate()?;

        let user = match self.check_credentials(&req.email, &req.password).await? {
            Ok(user) => user,
            Err(reason) => {
                warn!("[LOGIN] Login refused: {}", reason);
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let token = self.issue_token(&user)?;

        info!("[LOGIN] User {} logged in", user.id);

        Ok(AuthResponse {
            token,
            user: UserInfo::from(user),
        })
    }

    /// Check credentials without issuing a token.
    ///
    /// The outer `Result` carries infrastructure errors, the inner one the login decision.
    pub async fn check_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<std::result::Result<User, LoginFailure>> {
        let Some(user) = UserRepository::find_by_email(&self.db, email).await? else {
            verify_against_dummy(password);
            return Ok(Err(LoginFailure::UnknownEmail));
        };

        if !user.is_active {
            verify_against_dummy(password);
            return Ok(Err(LoginFailure::AccountDisabled));
        }

        let matches = verify_password(password, &user.password_hash).map_err(|e| {
            error!("[LOGIN] Stored password hash for user {} is unusable: {}", user.id, e);
            AppError::Internal(e.to_string())
        })?;

        if !matches {
            return Ok(Err(LoginFailure::WrongPassword));
        }

        Ok(Ok(user))
    }

    fn issue_token(&self, user: &User) -> Result<String> {
        self.tokens.issue(user.id).map_err(|e| {
            error!("[AUTH] Token generation failed for user {}: {}", user.id, e);
            AppError::Internal(e.to_string())
        })
    }
}
