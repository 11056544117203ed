use super::*;

fn temp_session_file() -> PathBuf {
    std::env::temp_dir()
        .join(format!("culinary-cli-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

fn store_at(path: &PathBuf) -> SessionStore<FileStorage> {
    SessionStore::open(FileStorage::new(path)).unwrap()
}

#[test]
fn register_args_default_to_blank_fields() {
    let cli = Cli::try_parse_from(["culinary", "register", "--username", "chef"]).unwrap();
    let Command::Register(args) = cli.command else {
        panic!("expected register command");
    };
    let draft = args.into_draft();
    assert_eq!(draft.username, "chef");
    assert_eq!(draft.full_name, "");
    assert_eq!(draft.validate().unwrap_err().to_string(), "All fields are required");
}

#[test]
fn session_file_flag_overrides_default() {
    let cli = Cli::try_parse_from(["culinary", "--session-file", "/tmp/s.json", "logout"]).unwrap();
    assert_eq!(cli.session_file, PathBuf::from("/tmp/s.json"));
    assert!(matches!(cli.command, Command::Logout));
}

#[test]
fn login_requires_username_and_full_name() {
    assert!(Cli::try_parse_from(["culinary", "login", "--username", "chef"]).is_err());
}

#[test]
fn login_then_whoami_shows_profile() {
    let path = temp_session_file();
    let args = LoginArgs {
        username: "chef".to_owned(),
        full_name: "Julia Child".to_owned(),
        email: "julia@example.com".to_owned(),
        phone: String::new(),
    };
    run_login(&mut store_at(&path), args);

    let text = render_whoami(&store_at(&path), false).unwrap();
    assert!(text.starts_with("chef\n"));
    assert!(text.contains("Name: Julia Child"));
}

#[test]
fn whoami_json_is_null_when_signed_out() {
    let path = temp_session_file();
    assert_eq!(render_whoami(&store_at(&path), true).unwrap(), "null");
}

#[test]
fn whoami_text_when_signed_out() {
    let path = temp_session_file();
    assert_eq!(render_whoami(&store_at(&path), false).unwrap(), "You are not signed in.");
}

#[test]
fn api_config_override_is_validated() {
    assert_eq!(
        api_config(Some("http://localhost:8000/")).unwrap().register_url(),
        "http://localhost:8000/user/register"
    );
    assert!(matches!(api_config(Some("localhost")), Err(CliError::Config(_))));
}

#[test]
fn next_step_hint_names_login() {
    assert!(next_step_hint("/login").contains("culinary login"));
    assert_eq!(next_step_hint("/profile"), "open /profile");
}

#[tokio::test]
async fn register_validation_failure_is_reported_without_network() {
    let path = temp_session_file();
    let config = ApiConfig::with_origin("http://127.0.0.1:9").unwrap();
    let args = RegisterArgs {
        username: "chef".to_owned(),
        full_name: "Julia Child".to_owned(),
        phone: "555".to_owned(),
        email: "julia@example.com".to_owned(),
        password: "a".to_owned(),
        confirm_password: "b".to_owned(),
    };

    let err = run_register(&config, &mut store_at(&path), args).await.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
}
