//! User creation and authentication tests.
//!
//! Covers the service behind the `create-user` command and the token
//! issue/verify cycle, with the user store mocked out.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use cellar::config::Config;
use cellar::domain::{NewUser, Password, User, UserRole};
use cellar::errors::AppError;
use cellar::infra::MockUserRepository;
use cellar::services::{AuthService, Authenticator, UserManager, UserService};

const EMAIL: &str = "krum@codixis.com";
const PASSWORD: &str = "aBcd@5678yilnjvgtiuh";

fn admin_account(id: Uuid, password_hash: String) -> User {
    User {
        id,
        email: EMAIL.to_string(),
        password_hash,
        roles: vec![UserRole::Admin],
        created_at: Utc::now(),
    }
}

fn admin_input() -> NewUser {
    NewUser {
        email: EMAIL.to_string(),
        password: PASSWORD.to_string(),
        role: "admin".to_string(),
    }
}

// =============================================================================
// Account creation
// =============================================================================

#[tokio::test]
async fn create_user_stores_a_hash_instead_of_the_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq(EMAIL))
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|email, hash, roles| {
            email == EMAIL
                && hash != PASSWORD
                && hash.starts_with("$argon2")
                && roles == &["admin".to_string()]
        })
        .times(1)
        .returning(|email, password_hash, roles| {
            Ok(User {
                id: Uuid::new_v4(),
                email,
                password_hash,
                roles: roles.iter().map(|r| UserRole::from(r.as_str())).collect(),
                created_at: Utc::now(),
            })
        });

    let service = UserManager::new(Arc::new(repo));
    let user = service.create_user(admin_input()).await.unwrap();

    assert_eq!(user.email, EMAIL);
    assert_eq!(user.roles, vec![UserRole::Admin]);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(|_| Ok(Some(admin_account(Uuid::new_v4(), "hash".to_string()))));

    // No create expectation: the existing account must block the insert.
    let service = UserManager::new(Arc::new(repo));
    let err = service.create_user(admin_input()).await.unwrap_err();

    match err {
        AppError::Conflict(message) => {
            assert_eq!(message, "User with this email already exists");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_input_never_reaches_the_store() {
    // Neither lookup nor insert may run for input this broken.
    let service = UserManager::new(Arc::new(MockUserRepository::new()));
    let input = NewUser {
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        role: "superuser".to_string(),
    };
    let err = service.create_user(input).await.unwrap_err();

    match err {
        AppError::Validation(violations) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["email", "password", "role"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================================
// Login and token verification
// =============================================================================

fn authenticator_with_admin() -> (Authenticator, Uuid) {
    let user_id = Uuid::new_v4();
    let password_hash = Password::new(PASSWORD).unwrap().into_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq(EMAIL))
        .returning(move |_| Ok(Some(admin_account(user_id, password_hash.clone()))));

    (
        Authenticator::new(Arc::new(repo), Config::for_tests()),
        user_id,
    )
}

#[tokio::test]
async fn login_issues_a_token_the_service_accepts() {
    let (service, user_id) = authenticator_with_admin();

    let response = service
        .login(EMAIL.to_string(), PASSWORD.to_string())
        .await
        .unwrap();
    let claims = service.verify_token(&response.token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, EMAIL);
    assert_eq!(claims.roles, vec!["admin".to_string()]);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (service, _) = authenticator_with_admin();

    let err = service
        .login(EMAIL.to_string(), "not-the-password-1".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn unknown_email_is_rejected_like_a_bad_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));

    let service = Authenticator::new(Arc::new(repo), Config::for_tests());
    let err = service
        .login("nobody@codixis.com".to_string(), PASSWORD.to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn garbage_token_fails_verification() {
    let repo = MockUserRepository::new();
    let service = Authenticator::new(Arc::new(repo), Config::for_tests());

    let err = service.verify_token("not-a-jwt").unwrap_err();
    assert!(matches!(err, AppError::Jwt(_)));
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let (issuing, _) = authenticator_with_admin();
    let response = issuing
        .login(EMAIL.to_string(), PASSWORD.to_string())
        .await
        .unwrap();

    let mut tampered: Vec<&str> = response.token.split('.').collect();
    let forged_signature = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    tampered[2] = forged_signature;
    let forged = tampered.join(".");

    let err = issuing.verify_token(&forged).unwrap_err();
    assert!(matches!(err, AppError::Jwt(_)));
}
