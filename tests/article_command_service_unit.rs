// tests/article_command_service_unit.rs
use chrono::Duration;
use penwise::application::{
    commands::articles::{CreateArticleCommand, ToggleLikeCommand, UpdateArticleCommand},
    dto::{AuthenticatedUser, TagsInput},
    error::ApplicationError,
    services::ApplicationServices,
};
use penwise::domain::user::UserId;
use penwise::infrastructure::util::DefaultSlugGenerator;
use std::sync::Arc;

mod support;

use support::{
    FakeTokenManager, InMemoryArticleStore, InMemoryUserRepo, PlainPasswordHasher, TickingClock,
    fixed_now,
};

fn services() -> ApplicationServices {
    let articles = Arc::new(InMemoryArticleStore::default());
    ApplicationServices::new(
        Arc::new(InMemoryUserRepo::default()),
        articles.clone(),
        articles,
        Arc::new(PlainPasswordHasher),
        Arc::new(FakeTokenManager),
        Arc::new(TickingClock::default()),
        Arc::new(DefaultSlugGenerator),
    )
}

fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("user{id}"),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

fn create_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        title: title.into(),
        content: "content".into(),
        excerpt: "excerpt".into(),
        tags: TagsInput::default(),
        cover_image: Some(String::new()),
    }
}

#[tokio::test]
async fn unknown_author_is_rendered_as_bare_reference() {
    let services = services();

    let article = services
        .article_commands
        .create_article(&actor(77), create_command("Orphan"))
        .await
        .unwrap();

    assert_eq!(article.author.id, 77);
    assert!(article.author.username.is_none());
    assert!(article.cover_image.is_none());
    assert!(article.tags.is_empty());
}

#[tokio::test]
async fn title_is_trimmed_before_slugging() {
    let services = services();

    let article = services
        .article_commands
        .create_article(&actor(1), create_command("  Rust & Axum 2024  "))
        .await
        .unwrap();

    assert_eq!(article.title, "Rust & Axum 2024");
    assert_eq!(article.slug, "rust-axum-2024");
}

#[tokio::test]
async fn update_by_other_user_is_forbidden() {
    let services = services();
    let created = services
        .article_commands
        .create_article(&actor(1), create_command("Mine"))
        .await
        .unwrap();

    let err = services
        .article_commands
        .update_article(
            &actor(2),
            UpdateArticleCommand {
                id: created.id,
                title: "Theirs".into(),
                content: "c".into(),
                excerpt: "e".into(),
                tags: TagsInput::default(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn malformed_encoded_tags_are_rejected() {
    let services = services();
    let mut command = create_command("Bad Tags");
    command.tags = TagsInput::Encoded("[not json".into());

    let err = services
        .article_commands
        .create_article(&actor(1), command)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[tokio::test]
async fn toggling_twice_restores_empty_likes() {
    let services = services();
    let created = services
        .article_commands
        .create_article(&actor(1), create_command("Toggle"))
        .await
        .unwrap();

    let first = services
        .article_commands
        .toggle_like(&actor(5), ToggleLikeCommand { id: created.id })
        .await
        .unwrap();
    let second = services
        .article_commands
        .toggle_like(&actor(5), ToggleLikeCommand { id: created.id })
        .await
        .unwrap();

    assert_eq!(first.likes, vec![5]);
    assert!(second.likes.is_empty());
}
