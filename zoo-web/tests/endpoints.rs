use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test as actix_test,
    web::Data,
    App, Error,
};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::runtime::Runtime;
use zoo_common::{LogMailer, ZooAppContext};
use zoo_models::settings::Settings;
use zoo_storage::{Migrator, MigratorTrait};

static RT: Lazy<Runtime> = Lazy::new(|| Runtime::new().unwrap());

static BOOTSTRAP: Lazy<()> = Lazy::new(|| {
    RT.block_on(async {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}/test.db?mode=rwc", dir.path().display());
        let db = sea_orm::Database::connect(url).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        // keep the backing file alive for the whole test run
        std::mem::forget(dir);

        let settings = Settings::new("zoo-test".to_string()).unwrap();
        ZooAppContext::init(settings, db, Arc::new(LogMailer)).unwrap();
        zoo_web::init_rbac_rules().await.unwrap();
    });
});

fn run<F: std::future::Future>(fut: F) -> F::Output {
    Lazy::force(&BOOTSTRAP);
    RT.block_on(fut)
}

async fn test_app(
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    actix_test::init_service(
        App::new()
            .app_data(Data::new(Arc::new(zoo_web::create_app_state())))
            .configure(zoo_web::configure_routes),
    )
    .await
}

async fn login<S, B>(app: &S, username: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = actix_test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(app, req).await;
    body["data"]["token"]
        .as_str()
        .expect("login must return a token")
        .to_string()
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[test]
fn health_probe_is_public() {
    run(async {
        let app = test_app().await;
        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    });
}

#[test]
fn login_issues_token_and_rejects_bad_password() {
    run(async {
        let app = test_app().await;

        let token = login(&app, "demo", "demo1234").await;
        assert!(!token.is_empty());

        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/login")
                .set_json(json!({ "username": "demo", "password": "wrong" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    });
}

#[test]
fn manage_animals_is_role_gated() {
    run(async {
        let app = test_app().await;

        // no token
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/manage-animals").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // visitor
        let visitor = login(&app, "demo", "demo1234").await;
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/manage-animals")
                .insert_header(bearer(&visitor))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // zookeeper
        let keeper = login(&app, "keeper", "keeper1234").await;
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/manage-animals")
                .insert_header(bearer(&keeper))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        // admin
        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({
                    "username": "curator",
                    "email": "curator@example.com",
                    "password": "curator123",
                    "passwordConfirm": "curator123",
                    "role": "admin"
                }))
                .to_request(),
        )
        .await;
        let admin = body["data"]["token"].as_str().unwrap().to_string();
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/manage-animals")
                .insert_header(bearer(&admin))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    });
}

#[test]
fn animal_detail_increments_view_count() {
    run(async {
        let app = test_app().await;

        let animals: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri("/animals").to_request(),
        )
        .await;
        let id = animals["data"][0]["id"].as_i64().unwrap();

        let first: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/animal/{id}"))
                .to_request(),
        )
        .await;
        let second: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/animal/{id}"))
                .to_request(),
        )
        .await;

        let before = first["data"]["animal"]["view_count"].as_i64().unwrap();
        let after = second["data"]["animal"]["view_count"].as_i64().unwrap();
        assert_eq!(after, before + 1);

        // unknown animal is a 404, not a counter write
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/animal/99999").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    });
}

#[test]
fn registration_creates_account_and_rejects_duplicates() {
    run(async {
        let app = test_app().await;

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({
                    "username": "webuser",
                    "email": "webuser@example.com",
                    "password": "password123",
                    "passwordConfirm": "password123",
                    "role": "visitor",
                    "age": 21
                }))
                .to_request(),
        )
        .await;
        assert!(body["data"]["token"].as_str().is_some());

        // same username again
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({
                    "username": "webuser",
                    "email": "other@example.com",
                    "password": "password123",
                    "passwordConfirm": "password123"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    });
}

#[test]
fn mismatched_password_confirmation_persists_nothing() {
    run(async {
        let app = test_app().await;

        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({
                    "username": "ghost",
                    "email": "ghost@example.com",
                    "password": "password123",
                    "passwordConfirm": "different456"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // the account must not exist
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/login")
                .set_json(json!({ "username": "ghost", "password": "password123" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    });
}

#[test]
fn category_creation_derives_slug_and_rejects_duplicates() {
    run(async {
        let app = test_app().await;
        let keeper = login(&app, "keeper", "keeper1234").await;

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/categories")
                .insert_header(bearer(&keeper))
                .set_json(json!({ "name": "Night Creatures" }))
                .to_request(),
        )
        .await;
        assert_eq!(body["data"]["slug"], "night-creatures");

        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/categories")
                .insert_header(bearer(&keeper))
                .set_json(json!({ "name": "Night Creatures" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    });
}

#[test]
fn favorite_toggle_endpoint_is_an_involution() {
    run(async {
        let app = test_app().await;
        let visitor = login(&app, "demo", "demo1234").await;

        let animals: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri("/animals").to_request(),
        )
        .await;
        let id = animals["data"][1]["id"].as_i64().unwrap();

        let first: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/animal/{id}/favorite"))
                .insert_header(bearer(&visitor))
                .to_request(),
        )
        .await;
        assert_eq!(first["data"], true);

        let second: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/animal/{id}/favorite"))
                .insert_header(bearer(&visitor))
                .to_request(),
        )
        .await;
        assert_eq!(second["data"], false);
    });
}

#[test]
fn quiz_round_trip_scores_trimmed_and_case_sensitive() {
    run(async {
        let app = test_app().await;

        let questions: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri("/quiz").to_request(),
        )
        .await;
        let data = questions["data"].as_array().unwrap();
        assert!(!data.is_empty() && data.len() <= 5);
        assert!(data[0].get("correctAnswer").is_none());

        let first_id = data[0]["id"].as_i64().unwrap().to_string();
        let second_id = data[1]["id"].as_i64().unwrap().to_string();

        // seeded order: Lion, Eagle, Elephant
        let mut answers = serde_json::Map::new();
        answers.insert(first_id, json!("  Lion  "));
        answers.insert(second_id, json!("eagle"));

        let outcome: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/quiz")
                .set_json(json!({ "answers": answers }))
                .to_request(),
        )
        .await;

        assert_eq!(outcome["data"]["score"], 1);
        assert_eq!(outcome["data"]["total"], data.len() as i64);
        let results = outcome["data"]["results"].as_array().unwrap();
        assert_eq!(results[0]["isCorrect"], true);
        assert_eq!(results[1]["isCorrect"], false);
        assert_eq!(results[2]["userAnswer"], Value::Null);
    });
}

#[test]
fn blog_authoring_is_educator_only_and_author_scoped() {
    run(async {
        let app = test_app().await;

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({
                    "username": "eddy",
                    "email": "eddy@example.com",
                    "password": "password123",
                    "passwordConfirm": "password123",
                    "role": "educator"
                }))
                .to_request(),
        )
        .await;
        let educator = body["data"]["token"].as_str().unwrap().to_string();

        // visitors cannot post
        let visitor = login(&app, "demo", "demo1234").await;
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/blogs")
                .insert_header(bearer(&visitor))
                .set_json(json!({ "title": "Nope", "content": "Nope" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // new posts start unapproved
        let created: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/blogs")
                .insert_header(bearer(&educator))
                .set_json(json!({ "title": "Keeper diaries", "content": "Day one." }))
                .to_request(),
        )
        .await;
        assert_eq!(created["data"]["approved"], false);
        let blog_id = created["data"]["id"].as_i64().unwrap();

        // unapproved posts are not listed publicly
        let listed: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri("/blogs").to_request(),
        )
        .await;
        assert!(listed["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|blog| blog["title"] != "Keeper diaries"));

        // only the author can delete
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/blogs/{blog_id}/delete"))
                .insert_header(bearer(&educator))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    });
}

#[test]
fn contact_form_acknowledges_submission() {
    run(async {
        let app = test_app().await;

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/contact")
                .set_json(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Opening hours",
                    "message": "When does the reptile house open?"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(body["data"]["sent"], true);
    });
}

#[test]
fn feedback_flows_to_admin_listing() {
    run(async {
        let app = test_app().await;

        let visitor = login(&app, "demo", "demo1234").await;
        let posted: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/feedback")
                .insert_header(bearer(&visitor))
                .set_json(json!({ "message": "Loved the otters", "rating": 5 }))
                .to_request(),
        )
        .await;
        assert_eq!(posted["data"]["rating"], 5);
        assert_eq!(posted["data"]["user"], "demo");

        // the listing is admin-only
        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/admin/feedback")
                .insert_header(bearer(&visitor))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({
                    "username": "fbadmin",
                    "email": "fbadmin@example.com",
                    "password": "fbadmin123",
                    "passwordConfirm": "fbadmin123",
                    "role": "admin"
                }))
                .to_request(),
        )
        .await;
        let admin = body["data"]["token"].as_str().unwrap().to_string();

        let listed: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/admin/feedback")
                .insert_header(bearer(&admin))
                .to_request(),
        )
        .await;
        assert!(listed["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|entry| entry["message"] == "Loved the otters"));
    });
}

#[test]
fn dashboard_requires_authentication() {
    run(async {
        let app = test_app().await;

        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/dashboard").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let visitor = login(&app, "demo", "demo1234").await;
        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/dashboard")
                .insert_header(bearer(&visitor))
                .to_request(),
        )
        .await;
        assert_eq!(body["data"]["role"], "visitor");
        assert!(body["data"]["animalCount"].as_u64().unwrap() >= 5);
    });
}
