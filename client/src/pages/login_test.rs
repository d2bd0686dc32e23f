use super::*;

#[test]
fn field_message_renders_validation_text() {
    assert_eq!(field_message(Some(ValidationError::UsernameTooShort)), "Username must be at least 3 characters");
    assert_eq!(field_message(Some(ValidationError::PasswordRequired)), "Password is required");
}

#[test]
fn field_message_is_empty_without_error() {
    assert_eq!(field_message(None), "");
}

#[test]
fn password_input_type_follows_visibility_toggle() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
