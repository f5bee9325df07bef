//! HTTP client wrapper: the single point of outbound request construction.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Without the
//! feature every method fails with a transport error, since these
//! endpoints are only reachable from the browser.
//!
//! Every request reads the current token from the injected session store
//! and, when one is present, attaches it as a bearer credential. Non-2xx
//! responses normalize into [`ApiError::Status`]; requests that never
//! reach the server become [`ApiError::Transport`]. Nothing is retried
//! and no timeout is imposed beyond transport defaults.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::session::{BrowserSession, SessionStore};

/// Typed HTTP client bound to one backend and one session store.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: Rc<dyn SessionStore>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, session: Rc<dyn SessionStore>) -> Self {
        Self { config, session }
    }

    /// Client for the build environment's backend, persisting the session
    /// in the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(ApiConfig::from_env(), Rc::new(BrowserSession))
    }

    /// The session store this client reads its bearer token from.
    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// `GET path?query`, parsing the 2xx payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for non-2xx responses or
    /// transport failures.
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .dispatch(gloo_net::http::Method::GET, path, query, None)
                .await?;
            parse_payload(&response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::unavailable())
        }
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for non-2xx responses or
    /// transport failures.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Verb::Post, path, body).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for non-2xx responses or
    /// transport failures.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Verb::Put, path, body).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for non-2xx responses or
    /// transport failures.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Verb::Patch, path, body).await
    }

    /// `DELETE path`, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for non-2xx responses or
    /// transport failures.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(gloo_net::http::Method::DELETE, path, &[], None)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    async fn send_json<T, B>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        #[cfg(feature = "hydrate")]
        {
            let json =
                serde_json::to_value(body).map_err(|err| ApiError::Transport(err.to_string()))?;
            let response = self.dispatch(verb.method(), path, &[], Some(json)).await?;
            parse_payload(&response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::unavailable())
        }
    }

    /// Build, authenticate, and send one request; non-2xx responses are
    /// normalized here so callers only see [`ApiError`].
    #[cfg(feature = "hydrate")]
    async fn dispatch(
        &self,
        method: gloo_net::http::Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let url = self.config.url(path);
        log::debug!("{method:?} {url}");

        let mut builder = gloo_net::http::RequestBuilder::new(&url).method(method);
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder.json(&json),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Transport(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(response.status(), &response.status_text(), &text);
            log::warn!("{method:?} {url} failed: {err}");
            return Err(err);
        }
        Ok(response)
    }
}

/// Body-carrying verbs routed through [`ApiClient::send_json`].
#[derive(Clone, Copy, Debug)]
enum Verb {
    Post,
    Put,
    Patch,
}

impl Verb {
    #[cfg(feature = "hydrate")]
    fn method(self) -> gloo_net::http::Method {
        match self {
            Verb::Post => gloo_net::http::Method::POST,
            Verb::Put => gloo_net::http::Method::PUT,
            Verb::Patch => gloo_net::http::Method::PATCH,
        }
    }
}

#[cfg(feature = "hydrate")]
async fn parse_payload<T: DeserializeOwned>(
    response: &gloo_net::http::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}
