//! Role secret configuration from the environment
//!
//! Priority for each value: `AUTH_SVC_*` variable, then the deprecated
//! unprefixed name. Both role secrets are required; the token lifetime
//! defaults to 30 days.

use crate::config::{env_with_fallback, env_with_fallback_parse};
use auth_svc_common::config::{AuthConfig, RoleSecrets};
use auth_svc_common::error::{CommonError, CommonResult};

/// User role signing secret
pub const USER_JWT_SECRET_ENV: &str = "AUTH_SVC_USER_JWT_SECRET";
/// Admin role signing secret
pub const ADMIN_JWT_SECRET_ENV: &str = "AUTH_SVC_ADMIN_JWT_SECRET";
/// Token lifetime in days
pub const TOKEN_TTL_DAYS_ENV: &str = "AUTH_SVC_TOKEN_TTL_DAYS";

const LEGACY_USER_JWT_SECRET_ENV: &str = "USER_JWT_SECRET";
const LEGACY_ADMIN_JWT_SECRET_ENV: &str = "ADMIN_JWT_SECRET";
const LEGACY_TOKEN_TTL_DAYS_ENV: &str = "TOKEN_TTL_DAYS";
const DEFAULT_TOKEN_TTL_DAYS: u32 = 30;

/// Build an [`AuthConfig`] from environment variables.
///
/// # Errors
/// `CommonError::Config` when a role secret is missing or blank.
pub fn load_config_from_env() -> CommonResult<AuthConfig> {
    let user_jwt_secret = required_secret(USER_JWT_SECRET_ENV, LEGACY_USER_JWT_SECRET_ENV)?;
    let admin_jwt_secret = required_secret(ADMIN_JWT_SECRET_ENV, LEGACY_ADMIN_JWT_SECRET_ENV)?;
    let token_ttl_days = env_with_fallback_parse(
        TOKEN_TTL_DAYS_ENV,
        LEGACY_TOKEN_TTL_DAYS_ENV,
        DEFAULT_TOKEN_TTL_DAYS,
    );

    Ok(AuthConfig {
        user_jwt_secret,
        admin_jwt_secret,
        token_ttl_days,
    })
}

/// Build validated [`RoleSecrets`] from environment variables.
pub fn load_role_secrets_from_env() -> CommonResult<RoleSecrets> {
    RoleSecrets::from_config(&load_config_from_env()?)
}

fn required_secret(name: &str, legacy: &str) -> CommonResult<String> {
    match env_with_fallback(name, legacy) {
        Some(secret) if !secret.trim().is_empty() => {
            tracing::info!("Using {} from environment variable", name);
            Ok(secret)
        }
        _ => Err(CommonError::Config(format!("{} is not set", name))),
    }
}
