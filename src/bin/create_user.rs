// src/bin/create_user.rs
use anyhow::Result;
use clap::Parser;
use kiji_core::application::{
    commands::users::{CreateUserCommand, UserCommandService},
    dto::UserDto,
};
use kiji_core::config::AppConfig;
use kiji_core::domain::user::Role;
use kiji_core::infrastructure::{
    database, repositories::PostgresUserRepository,
    security::password::Argon2PasswordHasher, telemetry::init_tracing, time::SystemClock,
};
use std::sync::Arc;

/// Creates one user account with a hashed password.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "USER_FIRST_NAME")]
    first_name: String,

    #[arg(long, env = "USER_LAST_NAME")]
    last_name: String,

    #[arg(long, env = "USER_EMAIL")]
    email: String,

    /// At least 3 characters
    #[arg(long, env = "USER_USERNAME")]
    username: String,

    /// At least 12 characters with upper, lower, digit and special characters
    #[arg(long, env = "USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// One of admin, editor, viewer
    #[arg(long, env = "USER_ROLE", default_value = "viewer")]
    role: Role,

    #[arg(long, env = "USER_AGE")]
    age: Option<u16>,

    #[arg(long, env = "USER_GENDER")]
    gender: Option<String>,

    #[arg(long, env = "USER_CONTACT_NUMBER")]
    contact_number: Option<String>,

    #[arg(long, env = "USER_ADDRESS")]
    address: Option<String>,
}

impl From<Args> for CreateUserCommand {
    fn from(args: Args) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            username: args.username,
            password: args.password,
            role: args.role,
            age: args.age,
            gender: args.gender,
            contact_number: args.contact_number,
            address: args.address,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing();

    match run(args).await {
        Ok(user) => print_summary(&user),
        Err(err) => {
            tracing::error!(error = %err, "user creation failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<UserDto> {
    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), 1).await?;
    database::run_migrations(&pool).await?;

    let service = UserCommandService::new(
        Arc::new(PostgresUserRepository::new(pool)),
        Arc::new(Argon2PasswordHasher),
        Arc::new(SystemClock),
    );

    Ok(service.create_user(args.into()).await?)
}

fn print_summary(user: &UserDto) {
    let optional = |value: Option<&str>| value.unwrap_or("-").to_string();

    println!("user created");
    println!("  id:       {}", user.id);
    println!("  name:     {} {}", user.first_name, user.last_name);
    println!("  email:    {}", user.email);
    println!("  username: {}", user.username);
    println!("  role:     {}", user.role);
    println!(
        "  age:      {}",
        user.age.map_or_else(|| "-".to_string(), |age| age.to_string())
    );
    println!("  gender:   {}", optional(user.gender.as_deref()));
    println!("  contact:  {}", optional(user.contact_number.as_deref()));
    println!("  address:  {}", optional(user.address.as_deref()));
    println!("  active:   {}", user.is_active);
}
