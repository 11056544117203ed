use super::*;

fn filled() -> RegistrationDraft {
    RegistrationDraft {
        username: "chef".to_owned(),
        full_name: "Julia Child".to_owned(),
        phone: "555-0199".to_owned(),
        email: "julia@example.com".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
    }
}

#[test]
fn input_type_reveals_only_password_fields() {
    assert_eq!(input_type_for(RegistrationField::Password, false), "password");
    assert_eq!(input_type_for(RegistrationField::Password, true), "text");
    assert_eq!(input_type_for(RegistrationField::ConfirmPassword, true), "text");
    assert_eq!(input_type_for(RegistrationField::Phone, true), "tel");
    assert_eq!(input_type_for(RegistrationField::Email, false), "email");
}

#[test]
fn message_class_reflects_kind() {
    assert_eq!(message_class(MessageKind::Error), "form-message form-message--error");
    assert_eq!(message_class(MessageKind::Success), "form-message form-message--success");
}

#[test]
fn precheck_passes_complete_draft() {
    assert_eq!(precheck(&filled()), None);
}

#[test]
fn precheck_reports_missing_field() {
    let draft = RegistrationDraft { phone: String::new(), ..filled() };
    assert_eq!(precheck(&draft), Some(FormMessage::error("All fields are required")));
}

#[test]
fn precheck_reports_mismatch() {
    let draft = RegistrationDraft { confirm_password: "other".to_owned(), ..filled() };
    assert_eq!(precheck(&draft), Some(FormMessage::error("Passwords do not match")));
}
