// JWT発行・検証・有効期限チェックのユニットテスト

#[cfg(test)]
mod jwt_tests {
    use auth_svc::auth::jwt::{create_jwt_with_expiration, TokenIssuer, TokenValidator};
    use auth_svc_common::auth::UserRole;
    use auth_svc_common::config::RoleSecrets;
    use auth_svc_common::error::AuthError;
    use std::sync::Arc;

    const USER_SECRET: &str = "user_secret_key_for_jwt_testing_12345678";
    const ADMIN_SECRET: &str = "admin_secret_key_for_jwt_testing_87654321";

    fn issuer_and_validator() -> (TokenIssuer, TokenValidator) {
        let secrets = Arc::new(RoleSecrets::new(USER_SECRET, ADMIN_SECRET).unwrap());
        (TokenIssuer::new(secrets.clone()), TokenValidator::new(secrets))
    }

    #[test]
    fn test_user_token_round_trip() {
        // Given: userロールで発行されたトークン
        let (issuer, validator) = issuer_and_validator();
        let token = issuer.issue("user-42", "user").expect("Failed to issue token");

        // When: userロールで検証
        let claims = validator
            .validate(&token, "user")
            .expect("Failed to validate token");

        // Then: クレームが正しい
        assert_eq!(claims.user_id(), "user-42");
        assert_eq!(claims.role(), UserRole::User);
        assert_eq!(claims.issuer(), "auth-svc");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_admin_token_rejected_as_user() {
        // Given: adminロールで発行されたトークン
        let (issuer, validator) = issuer_and_validator();
        let token = issuer.issue("admin-1", "admin").expect("Failed to issue token");

        // When: userロールで検証
        let result = validator.validate(&token, "user");

        // Then: 署名不一致で失敗
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
        assert!(validator.validate(&token, "admin").is_ok());
    }

    #[test]
    fn test_user_token_rejected_as_admin() {
        let (issuer, validator) = issuer_and_validator();
        let token = issuer.issue("user-42", "user").expect("Failed to issue token");

        let err = validator.validate(&token, "admin").unwrap_err();
        assert!(err.is_signature_error());
    }

    #[test]
    fn test_unknown_role_rejected_by_issue_and_validate() {
        let (issuer, validator) = issuer_and_validator();
        let token = issuer.issue("user-42", "user").expect("Failed to issue token");

        for role in ["guest", "ADMIN", ""] {
            assert!(matches!(
                issuer.issue("user-42", role),
                Err(AuthError::InvalidRole(_))
            ));
            assert!(matches!(
                validator.validate(&token, role),
                Err(AuthError::InvalidRole(_))
            ));
        }
    }

    #[test]
    fn test_expired_token_with_valid_signature() {
        // Given: 正しいシークレットで署名済みだが有効期限切れのトークン
        let (_, validator) = issuer_and_validator();
        let exp = chrono::Utc::now().timestamp() - 60;
        let token =
            create_jwt_with_expiration("user-42", UserRole::User, USER_SECRET.as_bytes(), exp)
                .expect("Failed to create JWT");

        // Then: 有効期限切れで失敗
        let err = validator.validate(&token, "user").unwrap_err();
        assert!(err.is_expired());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        // Given: ペイロードを別ユーザーのものに差し替えたトークン
        let (issuer, validator) = issuer_and_validator();
        let token = issuer.issue("user-42", "user").unwrap();
        let other = issuer.issue("user-43", "user").unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        // Then: 署名不一致
        assert!(matches!(
            validator.validate(&forged, "user"),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token_is_claim_decoding_error() {
        let (_, validator) = issuer_and_validator();

        let err = validator.validate("invalid.token.format", "user").unwrap_err();
        assert!(matches!(err, AuthError::ClaimDecoding(_)));
    }
}
