use core_lib::config::DatabaseConfig;
use core_lib::database::repository::{NewContact, NewProject};
use core_lib::{get_database_pool, run_migrations, AppError, ContactRepository, ProjectRepository};
use tempfile::NamedTempFile;

async fn setup_test_database() -> (sqlx::SqlitePool, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite:{}", temp_file.path().display()),
        ..DatabaseConfig::default()
    };

    let pool = get_database_pool(&config).await.unwrap();
    run_migrations(pool.clone()).await.unwrap();

    (pool, temp_file)
}

fn valid_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "A test project".to_string(),
        tech_stack: vec!["Rust".to_string(), "axum".to_string()],
        github_link: "https://github.com/owner/repo".to_string(),
        live_link: Some("https://example.com".to_string()),
        image: None,
    }
}

#[tokio::test]
async fn test_project_create_and_list() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ProjectRepository::new(pool);

    let created = repository.create(valid_project("First")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "First");
    assert_eq!(created.tech_stack, vec!["Rust", "axum"]);

    let projects = repository.list_all().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].github_link, "https://github.com/owner/repo");

    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_projects_listed_newest_first() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ProjectRepository::new(pool);

    repository.create(valid_project("Older")).await.unwrap();
    repository.create(valid_project("Newer")).await.unwrap();

    let projects = repository.list_all().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Newer");
    assert_eq!(projects[1].title, "Older");
}

#[tokio::test]
async fn test_project_write_boundary_rejects_bad_github_link() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ProjectRepository::new(pool);

    let mut project = valid_project("Bad link");
    project.github_link = "https://gitlab.com/owner/repo".to_string();

    let err = repository.create(project).await.unwrap_err();
    match err {
        AppError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("GitHub")), "{:?}", errors);
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_project_write_boundary_rejects_empty_tech_stack() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ProjectRepository::new(pool);

    let mut project = valid_project("No stack");
    project.tech_stack = Vec::new();

    assert!(matches!(
        repository.create(project).await.unwrap_err(),
        AppError::Validation(_)
    ));
}

#[tokio::test]
async fn test_project_optional_live_link_shape_enforced() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ProjectRepository::new(pool);

    let mut project = valid_project("Relative link");
    project.live_link = Some("not-a-url".to_string());
    assert!(matches!(
        repository.create(project).await.unwrap_err(),
        AppError::Validation(_)
    ));

    // Absent is fine.
    let mut project = valid_project("No link");
    project.live_link = None;
    assert!(repository.create(project).await.is_ok());
}

#[tokio::test]
async fn test_contact_create_assigns_timestamp() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ContactRepository::new(pool);

    let created = repository
        .create(NewContact {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            message: "Hi there".to_string(),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.email, "ann@x.com");
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_contact_submissions_create_distinct_rows() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ContactRepository::new(pool);

    let input = NewContact {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        message: "Hi there".to_string(),
    };

    let first = repository.create(input.clone()).await.unwrap();
    let second = repository.create(input).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repository.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_contact_write_boundary_enforces_field_constraints() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ContactRepository::new(pool);

    let err = repository
        .create(NewContact {
            name: String::new(),
            email: "bad".to_string(),
            message: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert_eq!(
                errors,
                vec![
                    "Name is required",
                    "Please provide a valid email address",
                    "Message is required",
                ]
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_contact_write_boundary_rejects_oversized_message() {
    let (pool, _guard) = setup_test_database().await;
    let repository = ContactRepository::new(pool);

    let err = repository
        .create(NewContact {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            message: "m".repeat(2001),
        })
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert_eq!(errors, vec!["Message cannot exceed 2000 characters"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
