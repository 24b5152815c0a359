pub mod middleware;
pub mod token;

pub use middleware::{admin_only_middleware, auth_middleware};
pub use token::{
    extract_bearer_token, extract_user_from_decoded_token, AuthenticatedUser, Claims, TokenDecoder,
};
