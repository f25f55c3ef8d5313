use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A signed-in session as returned by `GET /user/session`.
///
/// Sessions are replaced wholesale, never patched: the cache hands out clones
/// and swaps in a new value on every resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub create_time: Option<DateTime<FixedOffset>>,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn role(&self) -> Option<&str> {
        self.user.role.as_deref()
    }
}

impl SessionUser {
    /// Nickname when set, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            &self.username
        } else {
            &self.nickname
        }
    }
}

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Option<i64>,
    pub message: Option<String>,
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_envelope_decodes() {
        let body = r#"{
            "status": 200,
            "data": {
                "token": "1614567890123456789",
                "createTime": "2021-03-01T10:00:00+08:00",
                "user": {
                    "id": "13269",
                    "username": "sunface",
                    "nickname": "Sunface",
                    "avatar": "",
                    "role": "Admin"
                }
            }
        }"#;

        let response: ApiResponse<Session> = serde_json::from_str(body).unwrap();
        let session = response.data.unwrap();
        assert_eq!(session.user_id(), "13269");
        assert_eq!(session.username(), "sunface");
        assert_eq!(session.role(), Some("Admin"));
        assert_eq!(session.user.display_name(), "Sunface");
        assert!(session.create_time.is_some());
    }

    #[test]
    fn test_signed_out_envelope_has_no_data() {
        let response: ApiResponse<Session> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.data.is_none());

        let response: ApiResponse<Session> = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = SessionUser {
            id: "1".to_string(),
            username: "guest".to_string(),
            nickname: String::new(),
            avatar: String::new(),
            role: None,
            email: None,
        };
        assert_eq!(user.display_name(), "guest");
    }
}
