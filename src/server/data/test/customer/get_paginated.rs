use super::*;

/// Tests fetching the second page.
///
/// Expected: Ok with the remaining customer and the full total
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Anton", "Berta", "Cäsar"] {
        factory::customer::CustomerFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let (customers, total) = CustomerRepository::new(db).get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].0.name, "Cäsar");
    assert_eq!(customers[0].1, 0);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok with no customers and a total of zero
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customers, total) = CustomerRepository::new(db).get_paginated(0, 10).await?;

    assert!(customers.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
