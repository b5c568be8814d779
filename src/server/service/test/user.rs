use super::*;
use crate::server::{
    error::auth::AuthError,
    model::user::{ChangePasswordParams, UpdateProfileParams},
    service::user::UserService,
};
use test_utils::factory::user::DEFAULT_PASSWORD;

fn change(old: &str, new1: &str, new2: &str) -> ChangePasswordParams {
    ChangePasswordParams {
        old_password: old.to_string(),
        new_password1: new1.to_string(),
        new_password2: new2.to_string(),
    }
}

/// Tests logging in with correct and wrong credentials.
///
/// Expected: Ok for the right password, Err(InvalidCredentials) otherwise
#[tokio::test]
async fn authenticates_with_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    let authenticated = service.authenticate(&user.username, DEFAULT_PASSWORD).await?;
    assert_eq!(authenticated.id, user.id);

    let result = service.authenticate(&user.username, "falsch").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    let result = service.authenticate("niemand", DEFAULT_PASSWORD).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests creating the first administrator.
///
/// Expected: Ok with an admin able to log in
#[tokio::test]
async fn creates_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    assert!(!service.any_exists().await?);

    let admin = service
        .create(crate::server::model::user::CreateUserParams {
            username: "admin".to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            password: "sehr-geheim".to_string(),
            admin: true,
        })
        .await?;

    assert!(admin.admin);
    assert!(service.any_exists().await?);
    assert_eq!(service.authenticate("admin", "sehr-geheim").await?.id, admin.id);

    Ok(())
}

/// Tests the password change rules.
///
/// Expected: Err for missing, mismatching, overlong and wrong passwords, Ok otherwise
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    let result = service.change_password(user.id, change("", "neu", "neu")).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Required(_)))
    ));

    let result = service
        .change_password(user.id, change(DEFAULT_PASSWORD, "neu1", "neu2"))
        .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Die Passwörter stimmen nicht überein."
    );

    let long = "p".repeat(257);
    let result = service
        .change_password(user.id, change(DEFAULT_PASSWORD, &long, &long))
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PasswordTooLong))
    ));

    let result = service
        .change_password(user.id, change("falsch", "neu", "neu"))
        .await;
    assert_eq!(result.unwrap_err().to_string(), "Falsches Passwort.");

    service
        .change_password(user.id, change(DEFAULT_PASSWORD, "neu", "neu"))
        .await?;
    service.authenticate(&user.username, "neu").await?;

    Ok(())
}

/// Tests updating the profile with a username already in use.
///
/// Expected: Err(Taken) for the duplicate, Ok for a fresh username
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = UserService::new(db);

    let profile = |username: &str| UpdateProfileParams {
        username: username.to_string(),
        email: "erika@example.com".to_string(),
        first_name: "Erika".to_string(),
        last_name: "Mustermann".to_string(),
    };

    let result = service.update_profile(user.id, profile(&other.username)).await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Dieser Benutzername ist bereits vergeben."
    );

    let updated = service.update_profile(user.id, profile("erika")).await?;
    assert_eq!(updated.username, "erika");
    assert_eq!(updated.first_name, "Erika");

    Ok(())
}
