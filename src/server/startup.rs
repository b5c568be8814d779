use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, model::user::CreateUserParams, service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the portal database.
///
/// Sessions expire after seven days of inactivity; expired rows are purged every
/// minute by a background task.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the initial admin account when the user table is empty.
///
/// Uses `ADMIN_USERNAME` / `ADMIN_PASSWORD`. If no user exists and those are not
/// configured, logs a warning; nobody can log in until they are set.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    if user_service.any_exists().await? {
        return Ok(());
    }

    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        tracing::warn!(
            "No users exist; set ADMIN_USERNAME and ADMIN_PASSWORD to create the first admin"
        );
        return Ok(());
    };

    let user = user_service
        .create(CreateUserParams {
            username: username.clone(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            password: password.clone(),
            admin: true,
        })
        .await?;

    tracing::info!("Created initial admin user '{}'", user.username);

    Ok(())
}
