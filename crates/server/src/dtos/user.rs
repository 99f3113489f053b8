use database::entities::user;
use serde::Serialize;
use utoipa::ToSchema;

/// Public view of an account; the email address is not exposed
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub username: String,
    pub is_admin: bool,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_email() {
        let response = UserResponse::from(user::Model {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            is_admin: true,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["username"], "admin");
        assert_eq!(json["is_admin"], true);
        assert!(json.get("email").is_none());
    }
}
