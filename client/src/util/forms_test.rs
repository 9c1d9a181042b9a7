use super::*;

#[test]
fn login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  ops@weather.test ", " secret1 "),
        Ok(LoginInput { email: "ops@weather.test".to_owned(), password: " secret1 ".to_owned() })
    );
}

#[test]
fn login_input_reports_every_invalid_field() {
    let errors = validate_login_input("   ", "").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get("password"), Some(PASSWORD_REQUIRED));
}

#[test]
fn login_input_rejects_short_password() {
    let errors = validate_login_input("ops@weather.test", "12345").unwrap_err();
    assert_eq!(errors.get("email"), None);
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn login_input_rejects_malformed_email() {
    let errors = validate_login_input("ops-at-weather", "123456").unwrap_err();
    assert_eq!(errors.get("email"), Some(EMAIL_INVALID));
}

#[test]
fn forgot_password_requires_valid_email() {
    assert_eq!(validate_forgot_password_input(" a@b.co "), Ok("a@b.co".to_owned()));
    assert_eq!(validate_forgot_password_input("").unwrap_err().get("email"), Some(EMAIL_REQUIRED));
    assert_eq!(validate_forgot_password_input("a@b").unwrap_err().get("email"), Some(EMAIL_INVALID));
}

#[test]
fn plausible_email_shapes() {
    assert!(is_plausible_email("a@b.co"));
    assert!(is_plausible_email("first.last+tag@mail.weather.test"));
    assert!(!is_plausible_email("@b.co"));
    assert!(!is_plausible_email("a@@b.co"));
    assert!(!is_plausible_email("a@b."));
    assert!(!is_plausible_email("a b@c.co"));
}

#[test]
fn first_message_per_field_wins() {
    let mut errors = FieldErrors::new();
    errors.insert("email", EMAIL_REQUIRED);
    errors.insert("email", EMAIL_INVALID);
    assert_eq!(errors.get("email"), Some(EMAIL_REQUIRED));
}
