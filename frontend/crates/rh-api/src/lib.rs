pub mod auth_client;
pub mod error;
pub mod login_response;
pub mod register_request;
pub mod user_payload;

pub use auth_client::AuthClient;
pub use error::{ClientError, Result as ApiClientResult};
pub use login_response::LoginResponse;
pub use register_request::RegisterRequest;
pub use user_payload::UserPayload;
