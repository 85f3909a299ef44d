use super::*;

fn draft() -> ContactDraft {
    ContactDraft {
        name: " Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        company: " Analytical Engines ".to_owned(),
        message: "Hello there".to_owned(),
        honeypot: String::new(),
    }
}

// --- validation ---

#[test]
fn complete_draft_is_valid() {
    assert_eq!(draft().validate(), Ok(()));
}

#[test]
fn missing_fields_are_reported_in_order() {
    let empty = ContactDraft::default();
    assert_eq!(
        empty.validate(),
        Err(vec![FieldError::NameMissing, FieldError::EmailMissing, FieldError::MessageMissing])
    );
}

#[test]
fn malformed_email_is_invalid() {
    let mut d = draft();
    d.email = "ada.example.com".to_owned();
    assert_eq!(d.validate(), Err(vec![FieldError::EmailInvalid]));
}

#[test]
fn overlong_message_is_invalid() {
    let mut d = draft();
    d.message = "x".repeat(5001);
    assert_eq!(d.validate(), Err(vec![FieldError::MessageTooLong]));
    d.message = "x".repeat(5000);
    assert_eq!(d.validate(), Ok(()));
}

#[test]
fn field_errors_name_their_inputs() {
    assert_eq!(FieldError::NameMissing.field(), "name");
    assert_eq!(FieldError::EmailInvalid.field(), "email");
    assert_eq!(FieldError::MessageTooLong.field(), "message");
}

#[test]
fn email_shapes() {
    assert!(looks_like_email("a@b.co"));
    assert!(looks_like_email("first.last+tag@mail.example.org"));
    assert!(!looks_like_email("@b.co"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("a@.co"));
    assert!(!looks_like_email("a@b."));
    assert!(!looks_like_email("a@@b.co"));
    assert!(!looks_like_email("a b@c.co"));
}

// --- payload ---

#[test]
fn submission_trims_and_omits_empty_optionals() {
    let submission = draft()
        .into_submission("https://example.com/#contact", "2024-05-01T10:00:00.000Z")
        .expect("valid draft");
    assert_eq!(submission.name, "Ada Lovelace");
    assert_eq!(submission.phone, None);
    assert_eq!(submission.company.as_deref(), Some("Analytical Engines"));

    let json = serde_json::to_value(&submission).expect("serializes");
    assert!(json.get("phone").is_none());
    assert_eq!(json["company"], "Analytical Engines");
    assert_eq!(json["page"], "https://example.com/#contact");
    assert_eq!(json["submitted_at"], "2024-05-01T10:00:00.000Z");
}

#[test]
fn invalid_draft_does_not_build_submission() {
    let err = ContactDraft::default()
        .into_submission("p", "t")
        .expect_err("should fail");
    assert!(matches!(err, ContactError::Invalid(ref fields) if fields.len() == 3));
    assert_eq!(err.to_string(), "Please check the highlighted fields.");
}

#[test]
fn honeypot_marks_spam() {
    let mut d = draft();
    assert!(!d.is_spam());
    d.honeypot = "http://spam.example".to_owned();
    assert!(d.is_spam());
}

// --- endpoint / status ---

#[test]
fn form_attribute_wins_over_config() {
    assert_eq!(
        resolve_endpoint(Some("https://a.example/hook"), Some("https://b.example/hook")).as_deref(),
        Some("https://a.example/hook")
    );
    assert_eq!(
        resolve_endpoint(Some(" "), Some("https://b.example/hook")).as_deref(),
        Some("https://b.example/hook")
    );
    assert_eq!(resolve_endpoint(None, None), None);
}

#[test]
fn only_2xx_is_success() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    let err = check_status(422).expect_err("should reject");
    assert_eq!(err.to_string(), "Your message was rejected (status 422).");
    assert!(check_status(302).is_err());
}

#[test]
fn status_reflects_result() {
    assert_eq!(FormStatus::from_result(&Ok(())), FormStatus::Sent);
    let failed = FormStatus::from_result(&Err(ContactError::NotConfigured));
    assert_eq!(failed.message(), "The contact form is not configured.");
    assert_eq!(failed.class(), Some("is-error"));
}

#[test]
fn only_sending_is_busy() {
    assert!(FormStatus::Sending.is_busy());
    assert!(!FormStatus::Idle.is_busy());
    assert!(!FormStatus::Sent.is_busy());
    assert_eq!(FormStatus::Idle.class(), None);
    assert_eq!(FormStatus::Sending.class(), Some("is-sending"));
}
