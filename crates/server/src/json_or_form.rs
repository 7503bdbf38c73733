use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;
use shared::api::error::{Nothing, ServerError};

/// Body extractor accepting either a JSON or a url encoded form body,
/// picked by the request's content type. Anything that isn't JSON is read
/// as a form.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix().map_or(false, |name| name == "json"))
}

/// Well formed JSON that doesn't fit the payload is a bad request, like any
/// other field error
fn json_rejection(rejection: JsonRejection) -> ServerError<Nothing> {
    match rejection {
        JsonRejection::JsonDataError(e) => ServerError::status(StatusCode::BAD_REQUEST, e.body_text()),
        e => ServerError::status(e.status(), e.body_text()),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ServerError<Nothing>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_json_content_type(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(json_rejection)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ServerError::status(e.status(), e.body_text()))?;
            Ok(Self(value))
        }
    }
}
