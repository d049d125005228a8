//! 密码哈希功能单元测试
//!
//! 测试 Argon2id 密码哈希和验证功能

use booking_system::auth::password::{generate_password, PasswordHasher};

#[test]
fn test_password_hash_and_verify() {
    let hasher = PasswordHasher::new();
    let password = "secret123";

    let hash = hasher.hash(password).expect("Hashing should succeed");

    // 哈希值应该包含 argon2 标识
    assert!(hash.contains("$argon2"));

    // 验证正确密码
    assert!(hasher.verify(password, &hash));
}

#[test]
fn test_password_verify_with_wrong_password() {
    let hasher = PasswordHasher::new();
    let password = "secret123";

    let hash = hasher.hash(password).expect("Hashing should succeed");

    // 验证错误密码应该失败
    assert!(!hasher.verify("WrongPassword123!", &hash));
}

#[test]
fn test_password_hash_different_each_time() {
    let hasher = PasswordHasher::new();
    let password = "secret123";

    let hash1 = hasher.hash(password).expect("First hash should succeed");
    let hash2 = hasher.hash(password).expect("Second hash should succeed");

    // 由于随机盐，每次生成的哈希应该不同
    assert_ne!(hash1, hash2, "Hashes should be different due to salt");

    // 但两个哈希都应该能验证同一个密码
    assert!(hasher.verify(password, &hash1));
    assert!(hasher.verify(password, &hash2));
}

#[test]
fn test_password_hash_empty_string() {
    let hasher = PasswordHasher::new();
    let password = "";

    let hash = hasher.hash(password).expect("Empty password should hash");

    // 空密码应该能验证
    assert!(hasher.verify(password, &hash));

    // 非空密码应该验证失败
    assert!(!hasher.verify("password", &hash));
}

#[test]
fn test_password_hash_unicode() {
    let hasher = PasswordHasher::new();
    let password = "密码测试Test123!🔒";

    let hash = hasher.hash(password).expect("Unicode password should hash");

    assert!(hasher.verify(password, &hash));

    // 稍有不同的 Unicode 密码应该失败
    assert!(!hasher.verify("密码测试Test123🔒", &hash));
}

#[test]
fn test_password_hash_long_password() {
    let hasher = PasswordHasher::new();
    // 长密码
    let password = "a".repeat(500) + "B1!";

    let hash = hasher.hash(&password).expect("Long password should hash");

    assert!(hasher.verify(&password, &hash));
}

#[test]
fn test_verify_never_panics_on_malformed_digest() {
    let hasher = PasswordHasher::new();

    // 各种畸形摘要统一降级为“未通过”
    assert!(!hasher.verify("secret123", ""));
    assert!(!hasher.verify("secret123", "plaintext"));
    assert!(!hasher.verify("secret123", "$unknown$v=1$x"));
    assert!(!hasher.verify("secret123", "$argon2id$v=19$m=65536,t=3,p=4$"));
}

#[test]
fn test_generated_password_shape() {
    let password = generate_password(8);
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

    let longer = generate_password(32);
    assert_eq!(longer.len(), 32);

    // 两次生成的密码应该不同
    assert_ne!(generate_password(16), generate_password(16));
}

#[test]
fn test_generated_password_hashes_and_verifies() {
    let hasher = PasswordHasher::new();
    let password = generate_password(8);

    let hash = hasher.hash(&password).expect("Generated password should hash");
    assert!(hasher.verify(&password, &hash));
}
