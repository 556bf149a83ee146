// src/application/commands/users/mod.rs
mod create;
mod password;
mod service;

pub use create::CreateUserCommand;
pub use service::UserCommandService;
