//! Not-found and terminal error responders.

use salvo::{catcher::Catcher, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_owned(),
            message: message.into(),
        }
    }
}

/// Catcher rendering any error status without a body as [`ErrorResponse`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(handler)
}

#[handler]
async fn handler(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    // A matched path with no matching method is still an unmatched route.
    let body = if status == StatusCode::NOT_FOUND || status == StatusCode::METHOD_NOT_ALLOWED {
        res.status_code = Some(StatusCode::NOT_FOUND);

        ErrorResponse::new(
            "not_found",
            format!("route not found: {} {}", req.method(), req.uri().path()),
        )
    } else if status.is_server_error() {
        error!(
            status = status.as_u16(),
            method = %req.method(),
            path = %req.uri().path(),
            "request failed"
        );

        ErrorResponse::new("internal_error", "internal server error")
    } else {
        ErrorResponse::new(
            "request_error",
            status.canonical_reason().unwrap_or("request error"),
        )
    };

    res.render(Json(body));
    ctrl.skip_rest();
}
