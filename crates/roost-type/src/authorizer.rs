use iso8601_timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Form body of the `POST /url` exchange with the authorizer
///
/// Serialised as `application/x-www-form-urlencoded`. The redirect URI is
/// skipped entirely when absent, it is never sent as an empty field.
#[derive(Debug, Serialize)]
pub struct GetAuthUrlRequest<'a> {
    pub client: &'a str,
    pub client_user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<&'a str>,
}

/// JSON payload the authorizer answers with on a 200
///
/// Servers of the earlier protocol revision omit `expireAt`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuthUrlResponse {
    #[serde(default)]
    pub auth_url: String,
    pub expire_at: Option<Timestamp>,
}

#[cfg(test)]
mod test {
    use crate::authorizer::{GetAuthUrlRequest, GetAuthUrlResponse};
    use iso8601_timestamp::Timestamp;
    use pretty_assertions::assert_eq;

    const AUTH_URL_RESPONSE: &[u8] = br#"
    {
        "authUrl": "https://auth.example/oauth?response_type=code&client_id=0&_state_",
        "expireAt": "2026-02-20T12:00:00Z"
    }
    "#;

    #[test]
    fn deserialise_response() {
        let deserialised: GetAuthUrlResponse =
            sonic_rs::from_slice(AUTH_URL_RESPONSE).expect("Failed to deserialise response");

        assert_eq!(
            deserialised.auth_url,
            "https://auth.example/oauth?response_type=code&client_id=0&_state_"
        );
        assert_eq!(
            deserialised.expire_at,
            Timestamp::parse("2026-02-20T12:00:00Z")
        );
    }

    #[test]
    fn deserialise_empty_object() {
        let deserialised: GetAuthUrlResponse =
            sonic_rs::from_slice(b"{}").expect("Failed to deserialise response");

        assert_eq!(deserialised.auth_url, "");
        assert_eq!(deserialised.expire_at, None);
    }

    #[test]
    fn serialise_request_without_redirect() {
        let encoded = serde_urlencoded::to_string(GetAuthUrlRequest {
            client: "test-client",
            client_user_id: "12399",
            redirect_uri: None,
        })
        .expect("Failed to serialise request");

        assert_eq!(encoded, "client=test-client&client_user_id=12399");
    }

    #[test]
    fn serialise_request_with_redirect() {
        let encoded = serde_urlencoded::to_string(GetAuthUrlRequest {
            client: "test-client",
            client_user_id: "12399",
            redirect_uri: Some("https://example.com/redirect"),
        })
        .expect("Failed to serialise request");

        assert_eq!(
            encoded,
            "client=test-client&client_user_id=12399&redirect_uri=https%3A%2F%2Fexample.com%2Fredirect"
        );
    }
}
