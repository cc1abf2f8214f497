//! User Management
//!
//! REST handlers for account CRUD. See `handlers` for the route list.

pub mod handlers;

pub use handlers::{create_user, delete_user, get_user, list_users, update_user};
