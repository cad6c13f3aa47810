use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use crate::error::Result;
use crate::types::{EncryptedCookie, RequestDescriptor};

/// Response of the recorder endpoint
#[derive(Debug)]
pub struct Submission {
    pub status: StatusCode,
    pub body: String,
}

pub struct StdlClient {
    client: Client,
}

impl StdlClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the encrypted cookie blob from the auth endpoint
    pub async fn fetch_encrypted_cookie(&self, auth_url: &str) -> Result<String> {
        log::debug!("Fetching encrypted cookie from {}", auth_url);
        let response = self.client.get(auth_url).send().await?.error_for_status()?;
        let payload: EncryptedCookie = response.json().await?;
        Ok(payload.encrypted)
    }

    /// POST the request as JSON. The body is returned whatever the status.
    pub async fn submit(&self, url: &str, req: &RequestDescriptor) -> Result<Submission> {
        log::info!("Sending {} request to {}", req.req_type(), url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} responded with {}", url, status);
        }

        let body = response.text().await?;
        Ok(Submission { status, body })
    }
}

impl Default for StdlClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::request::create_request;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_encrypted_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cookie"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"encrypted": "AAAA", "ts": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = StdlClient::new();
        let encrypted = client
            .fetch_encrypted_cookie(&format!("{}/cookie", server.uri()))
            .await
            .unwrap();
        assert_eq!(encrypted, "AAAA");
    }

    #[tokio::test]
    async fn test_fetch_encrypted_cookie_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = StdlClient::new()
            .fetch_encrypted_cookie(&format!("{}/cookie", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_submit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/stdl"))
            .and(header("content-type", "application/json"))
            .and(body_json(
                json!({"reqType": "afreeca_live", "afreecaLive": {"userId": "u2", "once": true}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("accepted"))
            .expect(1)
            .mount(&server)
            .await;

        let req = create_request("afreeca_live", "u2", true, None).unwrap();
        let submission = StdlClient::new()
            .submit(&format!("{}/stdl", server.uri()), &req)
            .await
            .unwrap();
        assert_eq!(submission.status, StatusCode::OK);
        assert_eq!(submission.body, "accepted");
    }

    #[tokio::test]
    async fn test_submit_keeps_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let req = create_request("chzzk_live", "u1", true, None).unwrap();
        let submission = StdlClient::new()
            .submit(&format!("{}/stdl", server.uri()), &req)
            .await
            .unwrap();
        assert_eq!(submission.status, StatusCode::BAD_REQUEST);
        assert_eq!(submission.body, "bad request");
    }
}
