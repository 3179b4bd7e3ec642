use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderValue, Request, StatusCode};
use coachhub_application::{
    CoachingRepository, ProjectListingPolicy, ProjectRepository, UserRepository,
};
use coachhub_domain::{Coaching, Project, Role, User, UserId};
use coachhub_infrastructure::InMemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api_services::{RepositorySet, build_app_state};

use super::build_router;

struct TestApp {
    router: Router,
    ops: User,
    pm: User,
    client: User,
    coach: User,
    stranger: User,
    managed_project: Project,
    managed_coaching: Coaching,
    other_coaching: Coaching,
}

fn user(role: &str, first_name: &str) -> User {
    User::new(Role::from(role), first_name, None).unwrap_or_else(|_| unreachable!())
}

async fn test_app(policy: ProjectListingPolicy) -> TestApp {
    let store = Arc::new(InMemoryStore::new());

    let ops = user("ops", "Gandalf");
    let pm = user("pm", "Tony");
    let client = user("client", "Bambi");
    let coach = user("coach", "Sherlock");
    let stranger = user("admin", "Mallory");
    for member in [&ops, &pm, &client, &coach, &stranger] {
        assert!(store.save_user(member.clone()).await.is_ok());
    }

    let managed_project = Project::new(vec![pm.id()]);
    let other_project = Project::new(vec![UserId::new()]);
    let managed_coaching = Coaching::new(client.id(), coach.id(), managed_project.id());
    let other_coaching = Coaching::new(UserId::new(), UserId::new(), other_project.id());
    assert!(store.save_project(managed_project.clone()).await.is_ok());
    assert!(store.save_project(other_project).await.is_ok());
    assert!(store.save_coaching(managed_coaching.clone()).await.is_ok());
    assert!(store.save_coaching(other_coaching.clone()).await.is_ok());

    let repositories = RepositorySet::in_memory(store);
    let router = build_router(
        build_app_state(&repositories, policy, None),
        "http://localhost:3000",
    )
    .unwrap_or_else(|_| unreachable!());

    TestApp {
        router,
        ops,
        pm,
        client,
        coach,
        stranger,
        managed_project,
        managed_coaching,
        other_coaching,
    }
}

async fn get(router: &Router, uri: &str, user_id: Option<HeaderValue>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    let request = builder
        .body(Body::empty())
        .unwrap_or_else(|_| unreachable!());

    let response = router
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|_| unreachable!());
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get_as(router: &Router, uri: &str, user: &User) -> (StatusCode, Value) {
    let header = HeaderValue::from_str(user.id().to_string().as_str())
        .unwrap_or_else(|_| unreachable!());
    get(router, uri, Some(header)).await
}

fn listed_ids(body: &Value) -> Vec<String> {
    let mut ids: Vec<String> = body
        .as_array()
        .map(|records| {
            records
                .iter()
                .filter_map(|record| record["id"].as_str().map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default();
    ids.sort();
    ids
}

fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}

#[tokio::test]
async fn hello_routes_need_no_user() {
    let app = test_app(ProjectListingPolicy::default()).await;

    for uri in ["/", "/hello"] {
        let (status, body) = get(&app.router, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Hello World!" }));
    }
}

#[tokio::test]
async fn health_is_ok_on_memory_backend() {
    let app = test_app(ProjectListingPolicy::default()).await;

    let (status, body) = get(&app.router, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn authentication_failures_are_unauthorized() {
    let app = test_app(ProjectListingPolicy::default()).await;
    let unknown_user = UserId::new().to_string();

    let text = |value: &str| Some(HeaderValue::from_str(value).unwrap_or_else(|_| unreachable!()));
    let non_text = HeaderValue::from_bytes(b"\xffabc").unwrap_or_else(|_| unreachable!());

    let cases = [
        (None, "Missing X-User-Id header"),
        (text(""), "Missing X-User-Id header"),
        (text("not-a-uuid"), "Invalid user ID format"),
        (Some(non_text), "Invalid user ID format"),
        (text(unknown_user.as_str()), "Invalid user ID"),
    ];

    for (header, message) in cases {
        let (status, body) = get(&app.router, "/coachings", header.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {header:?}");
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn ops_lists_every_coaching() {
    let app = test_app(ProjectListingPolicy::default()).await;

    let (status, body) = get_as(&app.router, "/coachings", &app.ops).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed_ids(&body),
        sorted(vec![
            app.managed_coaching.id().to_string(),
            app.other_coaching.id().to_string(),
        ])
    );
}

#[tokio::test]
async fn scoped_roles_list_only_related_coachings() {
    let app = test_app(ProjectListingPolicy::default()).await;
    let expected = vec![app.managed_coaching.id().to_string()];

    for member in [&app.pm, &app.client, &app.coach] {
        let (status, body) = get_as(&app.router, "/coachings", member).await;
        assert_eq!(status, StatusCode::OK, "role {}", member.role());
        assert_eq!(listed_ids(&body), expected, "role {}", member.role());
    }
}

#[tokio::test]
async fn coaching_payload_uses_camel_case_fields() {
    let app = test_app(ProjectListingPolicy::default()).await;

    let (_, body) = get_as(&app.router, "/coachings", &app.client).await;
    let record = &body[0];

    assert_eq!(record["clientId"], json!(app.client.id().to_string()));
    assert_eq!(record["coachId"], json!(app.coach.id().to_string()));
    assert_eq!(
        record["projectId"],
        json!(app.managed_project.id().to_string())
    );
    assert!(record["createdAt"].is_string());
    assert!(record["updatedAt"].is_string());
}

#[tokio::test]
async fn unrecognized_role_is_forbidden() {
    let app = test_app(ProjectListingPolicy::default()).await;

    let (status, body) = get_as(&app.router, "/coachings", &app.stranger).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Forbidden" }));
}

#[tokio::test]
async fn coaching_detail_respects_visibility() {
    let app = test_app(ProjectListingPolicy::default()).await;
    let visible = format!("/coachings/{}", app.managed_coaching.id());
    let hidden = format!("/coachings/{}", app.other_coaching.id());

    let (status, body) = get_as(&app.router, &visible, &app.coach).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(app.managed_coaching.id().to_string()));

    let (status, _) = get_as(&app.router, &hidden, &app.coach).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_as(&app.router, &hidden, &app.ops).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get_as(&app.router, "/coachings/42", &app.ops).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn managers_only_policy_lists_projects_for_managers() {
    let app = test_app(ProjectListingPolicy::ManagersOnly).await;

    let (status, body) = get_as(&app.router, "/projects", &app.ops).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed_ids(&body).len(), 2);

    let (status, body) = get_as(&app.router, "/projects", &app.pm).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed_ids(&body),
        vec![app.managed_project.id().to_string()]
    );
    assert_eq!(body[0]["managerIds"], json!([app.pm.id().to_string()]));

    for member in [&app.client, &app.coach, &app.stranger] {
        let (status, _) = get_as(&app.router, "/projects", member).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "role {}", member.role());
    }
}

#[tokio::test]
async fn transitive_policy_lists_projects_through_coachings() {
    let app = test_app(ProjectListingPolicy::Transitive).await;

    for member in [&app.client, &app.coach] {
        let (status, body) = get_as(&app.router, "/projects", member).await;
        assert_eq!(status, StatusCode::OK, "role {}", member.role());
        assert_eq!(
            listed_ids(&body),
            vec![app.managed_project.id().to_string()]
        );
    }

    let (status, _) = get_as(&app.router, "/projects", &app.stranger).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
