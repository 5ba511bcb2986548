pub mod helpers;
pub mod create;
pub mod read;
pub mod update;
pub mod delete;

pub use self::create::{api_create, create, new_form};
pub use self::read::{list_all, list_mine, read};
pub use self::update::update;
pub use self::delete::delete;

/// Where a successful form submission lands.
pub const AFTER_CREATE_REDIRECT: &str = "/tasks";
