pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
        pub product_id: String,
    }
}

pub mod response {
    use crate::modules::user::repository::CartItems;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ProductAddedToCart(CartItems),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProductAddedToCart(cart) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Product added to cart", "cart": cart })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        ProductAlreadyInCart,
        FailedToAddProductToCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::ProductAlreadyInCart => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Product already in cart" })),
                )
                    .into_response(),
                Self::FailedToAddProductToCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add product to cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
