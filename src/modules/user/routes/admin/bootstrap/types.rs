pub mod request {
    use axum::extract::rejection::JsonRejection;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
    }

    pub struct Payload {
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
        FirstAdminCreated(UserSummary),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FirstAdminCreated(user) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "First admin user created successfully",
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
        AdminsAlreadyExist,
        UserNotFound,
        FailedToCreateFirstAdmin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBody(rejection) => rejection.into_response(),
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::AdminsAlreadyExist => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "error": "Admin users already exist. This endpoint can only be used when there are no admins."
                    })),
                )
                    .into_response(),
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToCreateFirstAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create first admin" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
