use super::*;

#[test]
fn endpoint_url_joins_with_single_slash() {
	assert_eq!(
		endpoint_url("https://api.example.com", "/commands"),
		"https://api.example.com/commands"
	);
	assert_eq!(
		endpoint_url("https://api.example.com/", "commands/3"),
		"https://api.example.com/commands/3"
	);
	assert_eq!(endpoint_url("https://api.example.com", ""), "https://api.example.com");
}

#[test]
fn client_uses_configured_base() {
	let config = AppConfig::default();
	let client = ApiClient::from_config(&config);
	assert_eq!(client.url("/x"), format!("{}/x", config.api_base_url));
}

#[test]
fn options_builder_keeps_order() {
	let options = RequestOptions::default()
		.param("page", "2")
		.param("q", "git add")
		.header("Authorization", "Bearer t");
	assert_eq!(
		options.params,
		vec![
			("page".to_owned(), "2".to_owned()),
			("q".to_owned(), "git add".to_owned())
		]
	);
	assert_eq!(options.headers.len(), 1);
}

#[test]
fn status_error_carries_code() {
	let err = ApiError::Status(404);
	assert_eq!(err.to_string(), "HTTP error! status: 404");
	assert!(matches!(err, ApiError::Status(404)));
}

#[test]
fn encode_error_converts_from_serde() {
	let serde_err = serde_json::from_str::<u8>("x").unwrap_err();
	let err: ApiError = serde_err.into();
	assert!(matches!(err, ApiError::Encode(_)));
}
