use super::*;

/// Tests the username duplicate check.
///
/// Expected: true for another user's name, false for the user's own name
#[tokio::test]
async fn ignores_own_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("erika")
        .build()
        .await?;
    let other = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.username_taken("erika", other.id).await?);
    assert!(!repo.username_taken("erika", user.id).await?);
    assert!(!repo.username_taken("max", other.id).await?);

    Ok(())
}
