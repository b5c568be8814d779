use super::*;

/// Tests substring matching on number and name.
///
/// A customer matching both number and name is returned once.
///
/// Expected: Ok with matches ordered by name
#[tokio::test]
async fn matches_substring_of_number_or_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::CustomerFactory::new(db)
        .customer_number("NORD-1")
        .name("Nordlicht GmbH")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .customer_number("K-77")
        .name("Autohaus Nord")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .name("Süd AG")
        .build()
        .await?;

    let result = CustomerRepository::new(db).filter("nord", true).await?;

    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Autohaus Nord", "Nordlicht GmbH"]);

    Ok(())
}

/// Tests exact matching ignores partial hits.
///
/// Expected: Ok with only the customer whose number equals the word
#[tokio::test]
async fn exact_match_requires_whole_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let exact = factory::customer::CustomerFactory::new(db)
        .customer_number("K-100")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .customer_number("K-1000")
        .build()
        .await?;

    let result = CustomerRepository::new(db).filter("k-100", false).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, exact.id);

    Ok(())
}

/// Tests that matching ignores the case of umlauts.
///
/// Expected: Ok with the customer found by lowercase substring and uppercase name
#[tokio::test]
async fn matches_umlauts_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::CustomerFactory::new(db)
        .name("Über Logistik")
        .build()
        .await?;
    let repo = CustomerRepository::new(db);

    let by_substring = repo.filter("über", true).await?;
    assert_eq!(by_substring.len(), 1);
    assert_eq!(by_substring[0].id, customer.id);

    let by_name = repo.filter("ÜBER LOGISTIK", false).await?;
    assert_eq!(by_name.len(), 1);

    assert!(repo.filter("übersee", true).await?.is_empty());

    Ok(())
}
