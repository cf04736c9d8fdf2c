use nd_client::{
	Backend, Error, HttpBackend, News, RequestConfig, ResultKind, SearchParams, UsernamePolicy,
};

use reqwest::StatusCode;
use serde_json::json;
use tracing_test::traced_test;
use wiremock::{
	matchers::{body_json, method, path, query_param},
	Mock, MockServer, ResponseTemplate,
};

fn backend(server: &MockServer) -> HttpBackend {
	HttpBackend::new(RequestConfig::new(&server.uri()).unwrap())
}

#[tokio::test]
#[traced_test]
async fn create_news_posts_without_id() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/news"))
		.and(body_json(json!({
			"title": "Launch",
			"content": "# Hello",
			"authorId": "a1",
		})))
		.respond_with(ResponseTemplate::new(201).set_body_json(json!({
			"id": "n1",
			"title": "Launch",
			"content": "# Hello",
			"authorID": "a1",
		})))
		.expect(1)
		.mount(&server)
		.await;

	let created = backend(&server)
		.create_news(&News {
			title: "Launch".into(),
			content: "# Hello".into(),
			author_id: "a1".into(),
			..Default::default()
		})
		.await
		.unwrap();

	assert_eq!(created.id.as_deref(), Some("n1"));
	assert_eq!(created.author_id, "a1");
}

#[tokio::test]
async fn update_author_puts_to_the_item_path() {
	let server = MockServer::start().await;
	Mock::given(method("PUT"))
		.and(path("/api/authors/a1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"id": "a1",
			"name": "Ada",
			"bio": "Counts things",
		})))
		.expect(1)
		.mount(&server)
		.await;

	let backend = backend(&server);
	let author = nd_client::Author {
		id: Some("a1".into()),
		name: "Ada".into(),
		bio: Some("Counts things".into()),
		..Default::default()
	};

	let updated = backend.update_author("a1", &author).await.unwrap();

	assert_eq!(updated.bio.as_deref(), Some("Counts things"));
}

#[tokio::test]
async fn http_errors_carry_status_and_body() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/authors/a1"))
		.respond_with(
			ResponseTemplate::new(404).set_body_json(json!({ "error": "Author not found" })),
		)
		.mount(&server)
		.await;

	let error = backend(&server).get_author("a1").await.unwrap_err();

	match error {
		Error::Http { status, body } => {
			assert_eq!(status, StatusCode::NOT_FOUND);
			assert!(body.contains("Author not found"));
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
	// Nothing listens on the discard port
	let backend = HttpBackend::new(RequestConfig::new("http://127.0.0.1:9").unwrap());

	let error = backend.list_news().await.unwrap_err();

	assert!(matches!(error, Error::Network(_)));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/news"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
		.mount(&server)
		.await;

	let error = backend(&server).list_news().await.unwrap_err();

	assert!(matches!(error, Error::Decode(_)));
}

#[tokio::test]
async fn null_collections_are_empty() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/authors"))
		.respond_with(ResponseTemplate::new(200).set_body_string("null"))
		.mount(&server)
		.await;

	assert!(backend(&server).list_authors().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_accepts_empty_no_content_response() {
	let server = MockServer::start().await;
	Mock::given(method("DELETE"))
		.and(path("/api/news/n1"))
		.respond_with(ResponseTemplate::new(204))
		.expect(1)
		.mount(&server)
		.await;

	backend(&server).delete_news("n1").await.unwrap();
}

#[tokio::test]
async fn null_search_response_is_an_empty_list() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/search"))
		.and(query_param("q", "rust"))
		.and(query_param("username", "ada"))
		.respond_with(ResponseTemplate::new(200).set_body_string("null"))
		.expect(1)
		.mount(&server)
		.await;

	let results = backend(&server)
		.search(
			&SearchParams::new("rust").with_username("ada"),
			UsernamePolicy::Required,
		)
		.await
		.unwrap();

	assert!(results.is_empty());
}

#[tokio::test]
async fn search_decodes_highlights() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/search"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{
				"id": "n1",
				"type": "news",
				"title": "Rust 2.0",
				"content": "Rust is here",
				"score": 3.5,
				"highlights": { "content": ["<em>Rust</em> is here"] }
			},
			{ "id": "a1", "type": "author", "author": "Ada" }
		])))
		.mount(&server)
		.await;

	let results = backend(&server)
		.search(&SearchParams::new("rust"), UsernamePolicy::Optional)
		.await
		.unwrap();

	assert_eq!(results.len(), 2);
	assert_eq!(results[0].kind, ResultKind::News);
	assert_eq!(
		results[0].highlights.as_ref().unwrap()["content"],
		vec!["<em>Rust</em> is here".to_string()]
	);
	assert_eq!(results[1].kind, ResultKind::Author);
}

#[tokio::test]
async fn missing_username_never_reaches_the_network() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/search"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
		.expect(0)
		.mount(&server)
		.await;

	let error = backend(&server)
		.search(
			&SearchParams::new("rust").with_username(""),
			UsernamePolicy::Required,
		)
		.await
		.unwrap_err();

	assert!(matches!(error, Error::Validation(_)));
}

#[tokio::test]
async fn suggest_passes_the_query() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/suggest"))
		.and(query_param("q", "ru"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{ "text": "rust", "type": "news" }
		])))
		.expect(1)
		.mount(&server)
		.await;

	let suggestions = backend(&server).suggest("ru").await.unwrap();

	assert_eq!(suggestions[0].text, "rust");
	assert_eq!(suggestions[0].kind, "news");
}
