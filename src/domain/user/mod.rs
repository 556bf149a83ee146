// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User, UserProfile};
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, PersonName, Role, UserId, Username};
