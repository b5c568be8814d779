use super::*;

/// Tests that updating replaces the product assignments.
///
/// Expected: Ok with only the newly given products linked
#[tokio::test]
async fn replaces_product_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let location = factory::create_location(db, customer.id).await?;
    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    let repo = ContactPersonRepository::new(db);
    let person = repo.create(params(location.id, vec![first.id])).await?;

    let updated = repo
        .update(person.id, params(location.id, vec![second.id]))
        .await?;
    assert!(updated.is_some());

    let (stored, products) = repo.get_by_id(person.id).await?.unwrap();
    assert_eq!(stored.first_name, "Erika");
    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(product_ids, vec![second.id]);

    Ok(())
}

/// Tests updating an unknown contact person.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let location = factory::create_location(db, customer.id).await?;

    let result = ContactPersonRepository::new(db)
        .update(999, params(location.id, Vec::new()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
