use super::*;

fn session() -> Session {
    Session {
        username: "chef".to_owned(),
        full_name: "Julia Child".to_owned(),
        email: "julia@example.com".to_owned(),
        phone: "555-0199".to_owned(),
    }
}

#[test]
fn signed_out_without_session() {
    let view = ProfileView::from_session(None);
    assert_eq!(view, ProfileView::SignedOut { message: "You are not signed in." });
    assert_eq!(view.to_text(), "You are not signed in.");
}

#[test]
fn signed_in_lists_rows_in_order() {
    let ProfileView::SignedIn { heading, subheading, rows } = ProfileView::from_session(Some(&session())) else {
        panic!("expected signed-in view");
    };
    assert_eq!(heading, "chef");
    assert_eq!(subheading, "Julia Child");
    let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, ["Username", "Name", "Email", "Phone"]);
    assert_eq!(rows[3].value, "555-0199");
}

#[test]
fn empty_username_uses_fallback_heading() {
    let user = Session { username: String::new(), ..session() };
    let ProfileView::SignedIn { heading, .. } = ProfileView::from_session(Some(&user)) else {
        panic!("expected signed-in view");
    };
    assert_eq!(heading, "User");
}

#[test]
fn backend_record_without_username_renders_fallback() {
    let user: Session = serde_json::from_str(r#"{"name":"Ana Diaz","email":"ana@example.com"}"#).unwrap();
    let ProfileView::SignedIn { heading, subheading, rows } = ProfileView::from_session(Some(&user)) else {
        panic!("expected signed-in view");
    };
    assert_eq!(heading, "User");
    assert_eq!(subheading, "Ana Diaz");
    assert_eq!(rows[1].value, "Ana Diaz");
    assert_eq!(rows[2].value, "ana@example.com");
    assert_eq!(rows[3].value, "");
}

#[test]
fn text_rendering_has_one_line_per_row() {
    let text = ProfileView::from_session(Some(&session())).to_text();
    assert_eq!(
        text,
        "chef\nUsername: chef\nName: Julia Child\nEmail: julia@example.com\nPhone: 555-0199"
    );
}
