use axum::{
    body::Body,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

/// Form extractor that never rejects.
///
/// A body that cannot be decoded is treated as an empty submission, so the
/// handler still renders a page and validation reports the missing fields.
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                tracing::debug!("Treating undecodable form body as empty: {}", describe(&rejection));
                Ok(Self(T::default()))
            }
        }
    }
}

fn describe(rejection: &FormRejection) -> String {
    match rejection {
        FormRejection::InvalidFormContentType(err) => format!("invalid content type: {}", err),
        FormRejection::FailedToDeserializeForm(err) => format!("failed to deserialize: {}", err),
        FormRejection::FailedToDeserializeFormBody(err) => {
            format!("failed to deserialize body: {}", err)
        }
        _ => "failed to read form body".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        name: String,
    }

    #[tokio::test]
    async fn test_decodes_urlencoded_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Ada"))
            .unwrap();

        let AppForm(sample) = AppForm::<Sample>::from_request(req, &()).await.unwrap();
        assert_eq!(sample.name, "Ada");
    }

    #[tokio::test]
    async fn test_wrong_content_type_yields_default() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Ada"}"#))
            .unwrap();

        let AppForm(sample) = AppForm::<Sample>::from_request(req, &()).await.unwrap();
        assert_eq!(sample, Sample::default());
    }
}
