use super::*;

/// Tests detecting whether any user exists.
///
/// Expected: false for an empty table, true after creating a user
#[tokio::test]
async fn detects_first_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    assert!(!repo.any_exists().await?);

    factory::create_user(db).await?;

    assert!(repo.any_exists().await?);

    Ok(())
}
