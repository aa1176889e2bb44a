pub mod users;
pub mod utils;

pub use users::{print_user, print_users};
pub use utils::{format_user_label, truncate};
