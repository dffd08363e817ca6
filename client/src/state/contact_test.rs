use super::*;

const TS: &str = "2026-05-09T10:00:00.000Z";

fn fields(name: &str, email: &str, category: &str, message: &str, consent: bool) -> ContactFields {
    ContactFields {
        name: name.to_owned(),
        email: email.to_owned(),
        category: category.to_owned(),
        message: message.to_owned(),
        consent,
    }
}

fn valid() -> ContactFields {
    fields("A", "a@b.com", "x", "hi", true)
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_shape_accepts_simple_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("ivan.petrov@mail.ru"));
    assert!(is_valid_email("x+tag@sub.domain.org"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email(""));
}

// =============================================================
// ContactFields::validate
// =============================================================

#[test]
fn validate_rejects_each_missing_field() {
    let cases = [
        fields("", "a@b.com", "x", "hi", true),
        fields("A", "", "x", "hi", true),
        fields("A", "a@b.com", "", "hi", true),
        fields("A", "a@b.com", "x", "", true),
        fields("A", "a@b.com", "x", "hi", false),
    ];
    for case in cases {
        assert_eq!(case.validate(TS), Err(ContactError::MissingFields));
    }
}

#[test]
fn validate_checks_required_fields_before_email_shape() {
    let f = fields("", "not-an-email", "x", "hi", true);
    assert_eq!(f.validate(TS), Err(ContactError::MissingFields));
}

#[test]
fn validate_rejects_bad_email_shape() {
    let f = fields("A", "not-an-email", "x", "hi", true);
    assert_eq!(f.validate(TS), Err(ContactError::InvalidEmail));
}

#[test]
fn validate_builds_submission_with_timestamp() {
    let submission = valid().validate(TS).expect("valid");
    assert_eq!(submission.name, "A");
    assert_eq!(submission.email, "a@b.com");
    assert_eq!(submission.category, "x");
    assert_eq!(submission.message, "hi");
    assert_eq!(submission.timestamp, TS);
}

#[test]
fn submission_serializes_all_fields() {
    let submission = valid().validate(TS).expect("valid");
    let json = serde_json::to_value(&submission).expect("json");
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["timestamp"], TS);
    assert!(json.get("consent").is_none());
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        ContactError::MissingFields.to_string(),
        "Пожалуйста, заполните все поля и согласитесь с обработкой данных"
    );
    assert_eq!(ContactError::InvalidEmail.to_string(), "Пожалуйста, введите корректный email");
}

// =============================================================
// ContactState
// =============================================================

#[test]
fn submit_missing_name_shows_error_and_keeps_fields() {
    let mut state = ContactState { fields: fields("", "a@b.com", "x", "hi", true), ..ContactState::default() };
    assert_eq!(state.submit(TS), Err(ContactError::MissingFields));
    let status = state.status.clone().expect("status");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, ContactError::MissingFields.to_string());
    assert_eq!(state.fields.email, "a@b.com");
    assert_eq!(state.fields.message, "hi");
}

#[test]
fn submit_bad_email_shows_email_error() {
    let mut state =
        ContactState { fields: fields("A", "not-an-email", "x", "hi", true), ..ContactState::default() };
    assert_eq!(state.submit(TS), Err(ContactError::InvalidEmail));
    assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("Пожалуйста, введите корректный email"));
    assert_eq!(state.fields.email, "not-an-email");
}

#[test]
fn accepted_submission_shows_success_clears_fields_and_hides_later() {
    let mut state = ContactState { fields: valid(), ..ContactState::default() };
    let submission = state.submit(TS).expect("accepted");
    assert_eq!(submission.name, "A");
    let generation = state.complete();

    let status = state.status.clone().expect("status");
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, SUCCESS_MESSAGE);
    assert_eq!(state.fields, ContactFields::default());

    assert!(state.hide_status(generation));
    assert!(state.status.is_none());
}

#[test]
fn new_message_replaces_previous_immediately() {
    let mut state = ContactState::default();
    state.show_status(StatusKind::Error, "first");
    state.show_status(StatusKind::Success, "second");
    let status = state.status.clone().expect("status");
    assert_eq!(status.text, "second");
    assert_eq!(status.kind, StatusKind::Success);
}

#[test]
fn stale_hide_does_not_clear_newer_message() {
    let mut state = ContactState { fields: valid(), ..ContactState::default() };
    state.submit(TS).expect("accepted");
    let first = state.complete();

    state.fields = valid();
    state.submit(TS).expect("accepted");
    let second = state.complete();

    assert!(!state.hide_status(first));
    assert!(state.status.is_some());
    assert!(state.hide_status(second));
    assert!(state.status.is_none());
}

#[test]
fn hide_delay_is_five_seconds() {
    assert_eq!(STATUS_HIDE_DELAY.as_millis(), 5000);
}
