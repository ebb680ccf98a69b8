pub mod request {
    use axum::extract::rejection::JsonRejection;
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
    }

    pub struct Payload {
        pub auth: Auth,
        /// Only inspected once the caller is allowed to use the endpoint.
        pub body: Result<Body, JsonRejection>,
    }
}

pub mod response {
    use crate::{modules::user::repository::UserSummary, utils};
    use axum::{
        extract::{rejection::JsonRejection, Json},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        UserPromoted(UserSummary),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserPromoted(user) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "User has been made an admin successfully",
                        "user": user,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidBody(JsonRejection),
        FailedToValidate(ValidationErrors),
        NotAnAdmin,
        UserNotFound,
        FailedToPromoteUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBody(rejection) => rejection.into_response(),
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::NotAnAdmin => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "Only admins can create other admins" })),
                )
                    .into_response(),
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToPromoteUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to make user an admin" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
