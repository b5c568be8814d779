use super::*;

/// Tests the duplicate check for customer numbers.
///
/// Expected: true for another customer's number, false when excluding its owner
#[tokio::test]
async fn detects_number_of_other_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo
        .create(SaveCustomerParams {
            customer_number: "K-4711".to_string(),
            name: "Duftwasser KG".to_string(),
        })
        .await?;

    assert!(repo.number_taken("K-4711", None).await?);
    assert!(!repo.number_taken("K-4711", Some(customer.id)).await?);
    assert!(!repo.number_taken("K-4712", None).await?);

    Ok(())
}
