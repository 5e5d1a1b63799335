use futures::future::{FutureExt, LocalBoxFuture};

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use log::*;

use phonebook_commons::model::{Draft, PersonId, Record};
use phonebook_commons::remote::{self, RemoteCollection, RemoteError};

/// REST access to the person collection through the browser fetch API
pub struct HttpPersons {
    base_url: String,
}

impl HttpPersons {
    pub fn new(base_url: String) -> HttpPersons {
        HttpPersons { base_url }
    }
}

impl RemoteCollection for HttpPersons {
    fn fetch_all(&self) -> LocalBoxFuture<'static, Result<Vec<Record>, RemoteError>> {
        let url = self.base_url.clone();
        async move {
            let body = send("GET", &url, None).await?;
            remote::decode(&body)
        }
        .boxed_local()
    }

    fn create(&self, draft: Draft) -> LocalBoxFuture<'static, Result<Record, RemoteError>> {
        let url = self.base_url.clone();
        async move {
            let payload = remote::encode(&draft)?;
            let body = send("POST", &url, Some(payload)).await?;
            remote::decode(&body)
        }
        .boxed_local()
    }

    fn replace(
        &self,
        id: PersonId,
        record: Record,
    ) -> LocalBoxFuture<'static, Result<Record, RemoteError>> {
        let url = remote::record_url(&self.base_url, &id);
        async move {
            let payload = remote::encode(&record)?;
            let body = send("PUT", &url, Some(payload)).await?;
            remote::decode(&body)
        }
        .boxed_local()
    }

    fn remove(&self, id: PersonId) -> LocalBoxFuture<'static, Result<(), RemoteError>> {
        let url = remote::record_url(&self.base_url, &id);
        async move {
            send("DELETE", &url, None).await?;
            Ok(())
        }
        .boxed_local()
    }
}

async fn send(method: &str, url: &str, payload: Option<String>) -> Result<String, RemoteError> {
    debug!("{} {}", method, url);

    let content_type = content_type(payload.as_deref());

    let mut init = RequestInit::new();
    init.method(method);
    if let Some(payload) = payload {
        init.body(Some(&JsValue::from_str(&payload)));
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| network_error(e, "Unable to build request"))?;
    if let Some(content_type) = content_type {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(|e| network_error(e, "Unable to set request headers"))?;
    }

    let window = web_sys::window().ok_or_else(|| RemoteError::Network {
        message: "No window available".to_string(),
    })?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network_error(e, "Unknown error during request"))?;
    let response: Response =
        value.dyn_into().map_err(|e| network_error(e, "Unknown error during response conversion"))?;

    if !response.ok() {
        return Err(RemoteError::Status {
            status: response.status(),
            message: response.status_text(),
        });
    }

    let text = response.text().map_err(|e| network_error(e, "Unable to read response"))?;
    let body = JsFuture::from(text).await.map_err(|e| network_error(e, "Unable to read response"))?;

    Ok(body.as_string().unwrap_or_default())
}

/// Bodiless requests go without a content type, so reads stay simple CORS requests
fn content_type(payload: Option<&str>) -> Option<&'static str> {
    payload.map(|_| "application/json")
}

fn network_error(cause: JsValue, fallback: &str) -> RemoteError {
    RemoteError::Network { message: cause.as_string().unwrap_or(fallback.to_string()) }
}

#[cfg(test)]
mod transport_tests {
    use super::*;

    #[test]
    fn content_type_only_with_payload_test() {
        assert_eq!(Some("application/json"), content_type(Some(r#"{"name":"Ada","number":"1"}"#)));
        assert_eq!(None, content_type(None));
    }
}
