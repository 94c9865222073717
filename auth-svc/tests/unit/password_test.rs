// パスワードハッシュ化と検証のユニットテスト

#[cfg(test)]
mod password_tests {
    use auth_svc::auth::password::{hash_password, verify_password, MAX_PASSWORD_BYTES};
    use auth_svc_common::error::AuthError;

    #[test]
    fn test_hash_password_creates_valid_hash() {
        // Given: 平文パスワード
        let password = "secure_password123";

        // When: パスワードをハッシュ化
        let hash = hash_password(password).expect("Failed to hash password");

        // Then: bcryptハッシュ形式（$2b$で始まる、60文字）
        assert!(hash.starts_with("$2b$"));
        assert_eq!(hash.len(), 60);
        assert!(!hash.contains(password));
    }

    #[test]
    fn test_hash_password_produces_different_hashes() {
        // Given: 同じパスワード
        let password = "same_password";

        // When: 2回ハッシュ化
        let hash1 = hash_password(password).expect("Failed to hash password");
        let hash2 = hash_password(password).expect("Failed to hash password");

        // Then: ソルトのため異なるハッシュだが、どちらも検証できる
        assert_ne!(hash1, hash2);
        assert!(verify_password(&hash1, password));
        assert!(verify_password(&hash2, password));
    }

    #[test]
    fn test_verify_password_with_correct_password() {
        let hash = hash_password("correct_password").expect("Failed to hash password");

        assert!(verify_password(&hash, "correct_password"));
    }

    #[test]
    fn test_verify_password_with_incorrect_password() {
        let hash = hash_password("correct_password").expect("Failed to hash password");

        assert!(!verify_password(&hash, "wrong_password"));
        assert!(!verify_password(&hash, "Correct_password"));
        assert!(!verify_password(&hash, ""));
    }

    #[test]
    fn test_verify_password_with_empty_password() {
        // Given: 空パスワードのハッシュ
        let hash = hash_password("").expect("Failed to hash password");

        // Then: 空パスワードも有効
        assert!(verify_password(&hash, ""));
        assert!(!verify_password(&hash, "non-empty"));
    }

    #[test]
    fn test_verify_password_with_unicode_password() {
        let password = "パスワード🔐";
        let hash = hash_password(password).expect("Failed to hash password");

        assert!(verify_password(&hash, password));
        assert!(!verify_password(&hash, "パスワード"));
    }

    #[test]
    fn test_verify_password_with_corrupt_hash_returns_false() {
        // Given: 壊れた保存済みハッシュ
        let mut hash = hash_password("password").expect("Failed to hash password");
        hash.truncate(20);

        // Then: エラーではなく不一致として扱われる
        assert!(!verify_password(&hash, "password"));
    }

    #[test]
    fn test_password_length_limit_boundary() {
        // Given: 上限ちょうどと1バイト超過のパスワード
        let at_limit = "p".repeat(MAX_PASSWORD_BYTES);
        let over_limit = "p".repeat(MAX_PASSWORD_BYTES + 1);

        // Then: 72バイトはハッシュ化・検証でき、73バイトは拒否される
        let hash = hash_password(&at_limit).expect("Failed to hash password");
        assert!(verify_password(&hash, &at_limit));
        assert!(matches!(
            hash_password(&over_limit),
            Err(AuthError::Hashing(_))
        ));
        // 切り詰めて一致させることはない
        assert!(!verify_password(&hash, &over_limit));
    }
}
