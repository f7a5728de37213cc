/**
 * Create User Tool
 *
 * Inserts a user into the credential store. The HTTP API has no registration
 * endpoint, so this is how logins come into existence.
 *
 * Usage: `create-user <login> <password>`
 *
 * Reads the same configuration as the server (`DATABASE_URL`, `.env`,
 * `POKEDEX_CONFIG`) and runs migrations before inserting.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use pokedex::backend::auth::password::hash_password_blocking;
    use pokedex::backend::auth::users::create_user;
    use pokedex::backend::error::is_unique_violation;
    use pokedex::backend::server::config::load_database;
    use pokedex::shared::AppConfig;

    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let (login, password) = match (args.next(), args.next(), args.next()) {
        (Some(login), Some(password), None) if !login.trim().is_empty() => (login, password),
        _ => {
            eprintln!("Usage: create-user <login> <password>");
            std::process::exit(2);
        }
    };

    let config = AppConfig::from_env()?;
    let pool = load_database(&config).await?;

    let password_hash = hash_password_blocking(&password).await?;

    match create_user(&pool, &login, &password_hash).await {
        Ok(user) => {
            println!("Created user {} (id {})", user.login, user.id);
            Ok(())
        }
        Err(e) if is_unique_violation(&e) => {
            eprintln!("Login already exists: {}", login);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("create-user requires the 'ssr' feature to be enabled.");
    std::process::exit(1);
}
