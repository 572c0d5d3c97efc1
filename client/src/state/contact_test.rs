use super::*;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        message: "Tengo un proyecto".to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_builds_trimmed_payload() {
    let form = ContactForm {
        name: "  Ana ".to_owned(),
        email: " ana@example.com ".to_owned(),
        message: " Hola ".to_owned(),
    };
    let payload = validate(&form).unwrap();
    assert_eq!(payload.from_name, "Ana");
    assert_eq!(payload.from_email, "ana@example.com");
    assert_eq!(payload.message, "Hola");
}

#[test]
fn validate_rejects_empty_message() {
    let form = ContactForm { message: String::new(), ..filled_form() };
    let err = validate(&form).unwrap_err();
    assert_eq!(err, ContactError::MissingFields);
    assert_eq!(err.to_string(), "Por favor, completa todos los campos");
}

#[test]
fn validate_rejects_whitespace_only_fields() {
    let form = ContactForm { name: "   ".to_owned(), ..filled_form() };
    assert_eq!(validate(&form), Err(ContactError::MissingFields));
}

#[test]
fn validate_rejects_malformed_email() {
    let form = ContactForm { email: "ana@example".to_owned(), ..filled_form() };
    let err = validate(&form).unwrap_err();
    assert_eq!(err, ContactError::InvalidEmail);
    assert_eq!(err.to_string(), "Email inválido");
}

#[test]
fn missing_fields_reported_before_bad_email() {
    let form = ContactForm { email: "nope".to_owned(), message: String::new(), ..filled_form() };
    assert_eq!(validate(&form), Err(ContactError::MissingFields));
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn is_valid_email_accepts_common_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(is_valid_email("a@b.c.d"));
}

#[test]
fn is_valid_email_rejects_bad_shapes() {
    for bad in ["", "plain", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

// =============================================================
// ContactState transitions
// =============================================================

#[test]
fn begin_submit_with_empty_message_sends_nothing() {
    let mut state = ContactState { form: ContactForm { message: String::new(), ..filled_form() }, ..Default::default() };
    assert!(state.begin_submit().is_none());
    assert_eq!(state.status, SendStatus::Error);
    assert_eq!(state.status_message, "Por favor, completa todos los campos");
}

#[test]
fn begin_submit_valid_form_moves_to_sending() {
    let mut state = ContactState { form: filled_form(), ..Default::default() };
    let payload = state.begin_submit().unwrap();
    assert_eq!(payload.from_email, "ana@example.com");
    assert!(state.is_sending());
    assert_eq!(state.status_message, SENDING_MESSAGE);
}

#[test]
fn finish_submit_success_clears_form() {
    let mut state = ContactState { form: filled_form(), ..Default::default() };
    state.begin_submit();
    state.finish_submit(true);
    assert_eq!(state.status, SendStatus::Success);
    assert_eq!(state.status_message, SUCCESS_MESSAGE);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn finish_submit_failure_keeps_form_for_resubmit() {
    let mut state = ContactState { form: filled_form(), ..Default::default() };
    state.begin_submit();
    state.finish_submit(false);
    assert_eq!(state.status, SendStatus::Error);
    assert_eq!(state.status_message, FAILURE_MESSAGE);
    assert_eq!(state.form, filled_form());
}

#[test]
fn reset_after_success_returns_to_idle() {
    let mut state = ContactState { form: filled_form(), ..Default::default() };
    state.begin_submit();
    state.finish_submit(true);
    state.reset_after_success();
    assert_eq!(state.status, SendStatus::Idle);
    assert!(state.status_message.is_empty());
}

#[test]
fn reset_after_success_ignores_newer_submission() {
    let mut state = ContactState { form: filled_form(), ..Default::default() };
    state.begin_submit();
    state.reset_after_success();
    assert!(state.is_sending());
}
