use uuid::Uuid;

use paddock_domain::pagination::PageRequest;
use paddock_portal::error::PortalError;
use paddock_portal::usecase::content::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, ListPublicVisualsUseCase,
    RandomVisualUseCase, SaveProjectInput, UpdateProjectUseCase,
};

use crate::helpers::{
    MockProjectRepo, MockVisualRepo, project_from_draft, test_project_draft, visual_from_draft,
};

#[tokio::test]
async fn should_create_project_with_ordered_gallery() {
    let repo = MockProjectRepo::default();
    let usecase = CreateProjectUseCase { repo: &repo };

    let id = usecase
        .execute(SaveProjectInput {
            draft: test_project_draft("apex-telemetry"),
            gallery_urls: vec!["https://a/1.jpg".to_owned(), "https://a/2.jpg".to_owned()],
        })
        .await
        .unwrap();

    let galleries = repo.galleries.lock().unwrap();
    let rows = galleries.get(&id).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sort_order, 0);
    assert_eq!(rows[0].alt_text, "Apex Telemetry image 1");
    assert_eq!(rows[1].image_url, "https://a/2.jpg");
}

#[tokio::test]
async fn should_skip_gallery_write_when_no_urls_given() {
    let repo = MockProjectRepo::default();
    let usecase = CreateProjectUseCase { repo: &repo };

    let id = usecase
        .execute(SaveProjectInput {
            draft: test_project_draft("apex-telemetry"),
            gallery_urls: vec![],
        })
        .await
        .unwrap();

    assert!(!repo.galleries.lock().unwrap().contains_key(&id));
}

#[tokio::test]
async fn should_replace_gallery_on_update_even_when_empty() {
    let repo = MockProjectRepo::default();
    let draft = test_project_draft("apex-telemetry");
    let id = Uuid::new_v4();
    repo.projects
        .lock()
        .unwrap()
        .push(project_from_draft(id, &draft));
    repo.galleries.lock().unwrap().insert(
        id,
        vec![paddock_portal::domain::types::NewProjectImage {
            image_url: "https://a/old.jpg".to_owned(),
            alt_text: "old".to_owned(),
            sort_order: 0,
        }],
    );

    let usecase = UpdateProjectUseCase { repo: &repo };
    usecase
        .execute(
            id,
            SaveProjectInput {
                draft,
                gallery_urls: vec![],
            },
        )
        .await
        .unwrap();

    assert!(repo.galleries.lock().unwrap().get(&id).unwrap().is_empty());
}

#[tokio::test]
async fn should_fetch_published_project_with_images_by_slug() {
    let repo = MockProjectRepo::default();
    let draft = test_project_draft("apex-telemetry");
    let id = Uuid::new_v4();
    repo.projects
        .lock()
        .unwrap()
        .push(project_from_draft(id, &draft));

    let usecase = GetProjectUseCase { repo: &repo };
    let (project, images) = usecase.execute("apex-telemetry").await.unwrap();

    assert_eq!(project.id, id);
    assert!(images.is_empty());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_slug() {
    let repo = MockProjectRepo::default();
    let usecase = GetProjectUseCase { repo: &repo };

    let result = usecase.execute("missing").await;
    assert!(matches!(result, Err(PortalError::ProjectNotFound)));
}

#[tokio::test]
async fn should_not_expose_unpublished_projects() {
    let repo = MockProjectRepo::default();
    let mut draft = test_project_draft("drafted");
    draft.published = false;
    repo.projects
        .lock()
        .unwrap()
        .push(project_from_draft(Uuid::new_v4(), &draft));

    let usecase = GetProjectUseCase { repo: &repo };
    assert!(matches!(
        usecase.execute("drafted").await,
        Err(PortalError::ProjectNotFound)
    ));
}

#[tokio::test]
async fn should_delete_project_and_gallery() {
    let repo = MockProjectRepo::default();
    let draft = test_project_draft("apex-telemetry");
    let id = Uuid::new_v4();
    repo.projects
        .lock()
        .unwrap()
        .push(project_from_draft(id, &draft));

    let usecase = DeleteProjectUseCase { repo: &repo };
    usecase.execute(id).await.unwrap();

    assert!(repo.projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_list_only_published_visuals() {
    let repo = MockVisualRepo::default();
    let mut published = paddock_portal::domain::types::VisualDraft {
        title: "Night run".to_owned(),
        description: None,
        image_url: "https://a/v.jpg".to_owned(),
        thumbnail_url: None,
        tags: vec![],
        featured: false,
        published: true,
        shot_date: None,
    };
    repo.visuals
        .lock()
        .unwrap()
        .push(visual_from_draft(Uuid::new_v4(), &published));
    published.published = false;
    published.title = "Hidden".to_owned();
    repo.visuals
        .lock()
        .unwrap()
        .push(visual_from_draft(Uuid::new_v4(), &published));

    let usecase = ListPublicVisualsUseCase { repo: &repo };
    let visuals = usecase.execute(PageRequest::default()).await.unwrap();

    assert_eq!(visuals.len(), 1);
    assert_eq!(visuals[0].title, "Night run");
}

#[tokio::test]
async fn should_return_not_found_when_no_visual_to_feature() {
    let repo = MockVisualRepo::default();
    let usecase = RandomVisualUseCase { repo: &repo };
    assert!(matches!(
        usecase.execute().await,
        Err(PortalError::VisualNotFound)
    ));
}
