use kodegen_tools_gallery_search::gallery_search::ProviderError;
use kodegen_tools_gallery_search::session::SessionError;
use kodegen_tools_gallery_search::utils::FETCH_FAILED_MESSAGE;

#[test]
fn test_transport_errors_hide_details_from_users() {
    let err: SessionError = ProviderError::Status {
        status: 502,
        body: "upstream exploded".to_string(),
    }
    .into();

    assert!(err.is_transport());
    assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
    assert!(err.to_string().contains("upstream exploded"));
}

#[test]
fn test_caller_errors_keep_their_message() {
    let err = SessionError::InvalidQuery("keyword must not be empty".to_string());
    assert!(!err.is_transport());
    assert!(err.user_message().contains("keyword must not be empty"));

    assert_eq!(
        SessionError::Busy.user_message(),
        "A search request is already in progress"
    );
    assert!(!SessionError::NotStarted.is_transport());
}

#[test]
fn test_error_transient_detection() {
    let transient = ProviderError::Status {
        status: 503,
        body: String::new(),
    };
    assert!(transient.is_transient());

    let throttled = ProviderError::Status {
        status: 429,
        body: String::new(),
    };
    assert!(throttled.is_transient());

    let permanent = ProviderError::Status {
        status: 404,
        body: String::new(),
    };
    assert!(!permanent.is_transient());

    let decode = serde_json::from_str::<u32>("nope").unwrap_err();
    assert!(!ProviderError::from(decode).is_transient());
    assert!(!ProviderError::Other("x".to_string()).is_transient());
}

#[test]
fn test_anyhow_errors_convert() {
    let err: ProviderError = anyhow::anyhow!("wrapped failure").into();
    assert!(matches!(err, ProviderError::Other(ref m) if m == "wrapped failure"));
}
