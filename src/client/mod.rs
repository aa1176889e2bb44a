pub mod api;
pub mod users_client;

pub use api::UsersApi;
pub use users_client::UsersClient;
