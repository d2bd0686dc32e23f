use super::*;

// =============================================================
// Local validation
// =============================================================

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  emilys ", "emilyspass"),
        Ok(Credentials { username: "emilys".to_owned(), password: "emilyspass".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_username() {
    let errors = validate_credentials("   ", "pw").unwrap_err();
    assert_eq!(errors.username, Some(ValidationError::UsernameRequired));
    assert_eq!(errors.password, None);
}

#[test]
fn validate_credentials_rejects_short_username() {
    let errors = validate_credentials("ab", "pw").unwrap_err();
    assert_eq!(errors.username, Some(ValidationError::UsernameTooShort));
}

#[test]
fn validate_credentials_reports_both_fields() {
    let errors = validate_credentials("", "").unwrap_err();
    assert_eq!(
        errors,
        LoginFieldErrors {
            username: Some(ValidationError::UsernameRequired),
            password: Some(ValidationError::PasswordRequired)
        }
    );
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials("abc", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_join_configured_base() {
    let cfg = ApiConfig { identity_base_url: "https://id.test", ..ApiConfig::default() };
    assert_eq!(login_endpoint(&cfg), "https://id.test/auth/login");
    assert_eq!(user_endpoint(&cfg, 15), "https://id.test/users/15");
}

#[test]
fn credentials_serialize_as_login_body() {
    let creds = Credentials { username: "emilys".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&creds).unwrap(), serde_json::json!({ "username": "emilys", "password": "pw" }));
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_login_grant_reads_tokens() {
    let body = serde_json::json!({
        "id": 1,
        "username": "emilys",
        "email": "emily.johnson@x.dummyjson.com",
        "accessToken": "acc",
        "refreshToken": "ref"
    })
    .to_string();
    let grant = decode_login_grant(&body, "typed").unwrap();
    assert_eq!(
        grant,
        LoginGrant {
            user_id: 1,
            username: "emilys".to_owned(),
            access_token: "acc".to_owned(),
            refresh_token: "ref".to_owned()
        }
    );
}

#[test]
fn decode_login_grant_without_token_errors() {
    let body = serde_json::json!({ "id": 1, "username": "emilys" }).to_string();
    assert_eq!(decode_login_grant(&body, "emilys"), Err(AuthError::MissingAccessToken));
    let body = serde_json::json!({ "id": 1, "accessToken": "" }).to_string();
    assert_eq!(decode_login_grant(&body, "emilys"), Err(AuthError::MissingAccessToken));
}

#[test]
fn decode_login_grant_falls_back_to_typed_username() {
    let body = serde_json::json!({ "id": 7, "accessToken": "acc" }).to_string();
    assert_eq!(decode_login_grant(&body, "typed").unwrap().username, "typed");
}

#[test]
fn decode_login_grant_rejects_malformed_body() {
    assert!(matches!(decode_login_grant("[]", "x"), Err(AuthError::Api(ApiError::Decode(_)))));
}

#[test]
fn decode_user_role_accepts_known_roles() {
    assert_eq!(decode_user_role(r#"{"id":1,"role":"admin"}"#), Ok(Role::Admin));
    assert_eq!(decode_user_role(r#"{"id":2,"role":"user"}"#), Ok(Role::User));
}

#[test]
fn decode_user_role_rejects_other_roles() {
    assert_eq!(decode_user_role(r#"{"role":"moderator"}"#), Err(AuthError::UnknownRole("moderator".to_owned())));
    assert_eq!(decode_user_role(r"{}"), Err(AuthError::UnknownRole(String::new())));
}

#[test]
fn build_session_combines_grant_and_role() {
    let grant = LoginGrant {
        user_id: 1,
        username: "emilys".to_owned(),
        access_token: "acc".to_owned(),
        refresh_token: "ref".to_owned(),
    };
    let session = build_session(grant, Role::Admin);
    assert_eq!(session.role.landing_route(), "/admin");
    assert_eq!(welcome_message(&session), "Login successful! Welcome, emilys (admin).");
}
