//! Create-or-update forms driven against the in-memory backend.

mod helpers;

use helpers::*;
use nd_core::{AuthorForm, EntityKind, Error, ErrorKind, FormState, NewsForm, Route, UpsertForm};
use nd_client::News;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn new_article_is_created_and_returns_to_the_list() {
	let backend = MockBackend::new();
	let mut form = UpsertForm::<News>::new(None);

	form.mount(&backend).await;
	assert_eq!(form.state(), &FormState::Editing);

	form.set_field("title", "Launch").unwrap();
	form.set_field("content", "# Hello").unwrap();
	form.set_field("authorId", "a1").unwrap();

	let route = form.submit(&backend).await.unwrap();

	assert_eq!(route, Route::list(EntityKind::News));
	assert_eq!(route.to_path(), "/list/news");
	assert_eq!(form.state(), &FormState::Success(route));
	assert_eq!(
		backend.calls(),
		vec![Call::CreateNews(News {
			title: "Launch".into(),
			content: "# Hello".into(),
			author_id: "a1".into(),
			..Default::default()
		})]
	);
	assert!(logs_contain("saved entity"));
}

#[tokio::test]
async fn existing_article_is_updated_never_created() {
	let backend = MockBackend::new().with_news(vec![article("n1", "Launch", "# Hello")]);
	let mut form = UpsertForm::<News>::new(Some("n1".into()));

	form.mount(&backend).await;
	assert_eq!(form.field("title").unwrap(), "Launch");

	form.set_field("title", "Launch, again").unwrap();
	form.submit(&backend).await.unwrap();

	let calls = backend.calls();
	assert_eq!(calls.len(), 2);
	assert_eq!(calls[0], Call::GetNews("n1".into()));
	assert!(matches!(
		&calls[1],
		Call::UpdateNews(id, news) if id == "n1" && news.title == "Launch, again"
	));
	assert_eq!(
		backend.count(|c| matches!(c, Call::CreateNews(_) | Call::CreateAuthor(_))),
		0
	);
}

#[tokio::test]
#[traced_test]
async fn missing_author_leaves_the_form_editable_with_defaults() {
	let backend = MockBackend::new();
	let mut form = AuthorForm::new(Some("a1".into()));

	form.mount(&backend).await;

	assert_eq!(form.state(), &FormState::Editing);
	assert_eq!(form.field("bio").unwrap(), "");
	assert_eq!(form.draft().bio, None);
	assert_eq!(
		form.last_error().map(Error::kind),
		Some(ErrorKind::HttpError { status: 404 })
	);
	assert!(logs_contain("failed to load entity"));
}

#[tokio::test]
async fn blank_required_fields_block_submission() {
	let backend = MockBackend::new();
	let mut form = UpsertForm::<News>::new(None);
	form.mount(&backend).await;

	form.set_field("title", "Launch").unwrap();
	let err = form.submit(&backend).await.unwrap_err();

	assert!(matches!(err, Error::MissingField("authorId")));
	assert_eq!(form.state(), &FormState::Editing);
	assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn failed_submit_stays_on_the_form() {
	let backend = MockBackend::new().with_authors(vec![author("a1", "Ada", None)]);
	backend.fail("update_author");

	let mut form = AuthorForm::new(Some("a1".into()));
	form.mount(&backend).await;
	form.set_field("bio", "Counts things").unwrap();

	let err = form.submit(&backend).await.unwrap_err();

	assert_eq!(err.kind(), ErrorKind::HttpError { status: 500 });
	assert!(err.is_retryable());
	assert_eq!(form.state(), &FormState::Editing);
	assert_eq!(form.draft().bio.as_deref(), Some("Counts things"));
	assert!(form.last_error().is_some());

	// The stored error does not stop a retry
	let backend = MockBackend::new().with_authors(vec![author("a1", "Ada", None)]);
	form.submit(&backend).await.unwrap();
	assert!(form.last_error().is_none());
}

#[tokio::test]
async fn cancel_returns_to_the_list_without_submitting() {
	let backend = MockBackend::new();
	let mut form = AuthorForm::new(None);
	form.mount(&backend).await;
	form.set_field("name", "Ada").unwrap();

	assert_eq!(form.cancel(), Route::list(EntityKind::Authors));
	assert!(form.lifetime().is_closed());
	assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn unmounted_form_never_issues_its_load() {
	let backend = MockBackend::new().with_news(vec![article("n1", "Launch", "# Hello")]);
	let mut form = UpsertForm::<News>::new(Some("n1".into()));

	form.unmount();
	form.mount(&backend).await;

	assert_eq!(form.state(), &FormState::Idle);
	assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn news_form_loads_the_article_and_the_author_picklist() {
	let mut stored = article("n1", "Launch", "# Hello");
	stored.tags = Some(vec!["release".into()]);

	let backend = MockBackend::new()
		.with_news(vec![stored])
		.with_authors(vec![author("a1", "Ada", None), author("a2", "Grace", None)]);
	let mut form = NewsForm::new(Some("n1".into()));

	form.mount(&backend).await;

	assert_eq!(form.authors().len(), 2);
	assert_eq!(
		form.author_options().collect::<Vec<_>>(),
		vec![("a1", "Ada"), ("a2", "Grace")]
	);
	assert_eq!(form.tags().tags(), ["release"]);

	assert_eq!(form.select_author("a2").unwrap().name, "Grace");
	assert!(form.select_author("a9").is_err());

	form.tags_mut().set_buffer("rust");
	form.tags_mut().commit();
	form.tags_mut().set_buffer("rust");
	form.tags_mut().commit();
	form.tags_mut().remove("release");

	form.submit(&backend).await.unwrap();

	let updated = &backend.news()[0];
	assert_eq!(updated.author_id, "a2");
	assert_eq!(updated.tags, Some(vec!["rust".to_string()]));
}

#[tokio::test]
async fn failed_picklist_does_not_block_the_article() {
	let backend = MockBackend::new().with_news(vec![article("n1", "Launch", "# Hello")]);
	backend.fail("list_authors");
	let mut form = NewsForm::new(Some("n1".into()));

	form.mount(&backend).await;

	assert!(form.authors().is_empty());
	assert_eq!(form.state(), &FormState::Editing);
	assert_eq!(form.form().field("title").unwrap(), "Launch");
	assert!(form.last_error().is_none());
}
