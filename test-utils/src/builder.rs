use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Customer, Location};
///
/// let test = TestBuilder::new()
///     .with_table(Customer)
///     .with_table(Location)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the customer side of the schema.
    ///
    /// Tables: Customer, CustomerAdviser, Location, ContactPerson, SoftwareProduct and
    /// ContactPersonProduct. Products are included because contact persons reference them.
    pub fn with_customer_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(CustomerAdviser)
            .with_table(Location)
            .with_table(ContactPerson)
            .with_table(SoftwareProduct)
            .with_table(ContactPersonProduct)
    }

    /// Adds every table needed for license, used product and heartbeat operations.
    ///
    /// Equivalent to `with_customer_tables()` followed by SoftwareModule, License,
    /// UsedSoftwareProduct and Heartbeat.
    pub fn with_license_tables(self) -> Self {
        self.with_customer_tables()
            .with_table(SoftwareModule)
            .with_table(License)
            .with_table(UsedSoftwareProduct)
            .with_table(Heartbeat)
    }

    /// Adds the complete portal schema including updates and users.
    pub fn with_portal_tables(self) -> Self {
        self.with_license_tables()
            .with_table(SoftwareUpdate)
            .with_table(User)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
