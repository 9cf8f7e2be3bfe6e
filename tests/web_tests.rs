//! Page-level checks of the Rocket front end with a mocked recommendation service

use career_compass::web::build_rocket;
use career_compass::web::session::SESSION_COOKIE;
use career_compass::AppConfig;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

const BOUNDARY: &str = "X-CAREER-COMPASS-BOUNDARY";

fn config_for(server: &MockServer, data_dir: &TempDir, admin_enabled: bool) -> AppConfig {
    AppConfig {
        api_base_url: server.uri(),
        data_dir: data_dir.path().to_path_buf(),
        admin_enabled,
        ..AppConfig::default()
    }
}

async fn client_for(config: &AppConfig) -> Client {
    Client::tracked(build_rocket(config).unwrap())
        .await
        .expect("valid rocket instance")
}

fn multipart_body(file_name: &str, media_type: &str, content: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{f}\"\r\nContent-Type: {m}\r\n\r\n{c}\r\n--{b}--\r\n",
        b = BOUNDARY,
        f = file_name,
        m = media_type,
        c = content,
    )
}

fn multipart_type() -> ContentType {
    ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY))
}

#[tokio::test]
async fn test_full_flow_upload_quiz_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "skills": ["Python", "SQL"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/recommendations"))
        .and(body_json(json!({"skills": ["Python", "SQL"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [{
                "title": "Data Analyst",
                "description": "Finds answers in data",
                "matchScore": 88,
                "requiredSkills": ["SQL"],
                "learningResources": ["SQL for Analysts"]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let config = config_for(&mock_server, &data_dir, false);
    let client = client_for(&config).await;

    let response = client
        .post("/upload")
        .header(multipart_type())
        .body(multipart_body("resume.pdf", "application/pdf", "%PDF-1.4 fake"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/quiz"));

    let page = client.get("/quiz").dispatch().await.into_string().await.unwrap();
    assert!(page.contains("Question 1 of 4"));

    let mut confirmed = String::new();
    for choice in ['I', 'N', 'T'] {
        let response = client
            .post("/quiz")
            .header(ContentType::Form)
            .body(format!("answers={}&choice={}", confirmed, choice))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        confirmed.push(choice);
        let page = response.into_string().await.unwrap();
        assert!(page.contains(&format!("name=\"answers\" value=\"{}\"", confirmed)));
    }

    let response = client
        .post("/quiz")
        .header(ContentType::Form)
        .body(format!("answers={}&choice=J", confirmed))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/dashboard"));

    let page = client
        .get("/dashboard")
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(page.contains("Data Analyst"));
    assert!(page.contains("Match Score: 88%"));
    assert!(page.contains("Personality type: <strong>INTJ</strong>"));
}

#[tokio::test]
async fn test_upload_rejects_non_pdf_without_calling_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"skills": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;

    let response = client
        .post("/upload")
        .header(multipart_type())
        .body(multipart_body("notes.txt", "text/plain", "just text"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let page = response.into_string().await.unwrap();
    assert!(page.contains("Please upload a PDF file"));
}

#[tokio::test]
async fn test_quiz_requires_a_choice() {
    let mock_server = MockServer::start().await;
    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;

    let response = client
        .post("/quiz")
        .header(ContentType::Form)
        .body("answers=E")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let page = response.into_string().await.unwrap();
    assert!(page.contains("Please select an answer before proceeding"));
    assert!(page.contains("Question 2 of 4"));
}

#[tokio::test]
async fn test_dashboard_failure_panel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommendations"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;
    let page = client
        .get("/dashboard")
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();

    assert!(page.contains("Error Loading Recommendations"));
    assert!(page.contains("Failed to fetch recommendations"));
}

#[tokio::test]
async fn test_admin_is_hidden_unless_enabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "a1",
                "personality_type": "ENFP",
                "skills": ["JavaScript"],
                "career_paths": [{"title": "Frontend Developer", "match_score": 0.9}],
                "created_at": "2024-02-10T09:30:00Z"
            },
            {
                "_id": "b2",
                "personality_type": "ISTJ",
                "skills": ["Go"],
                "career_paths": [],
                "created_at": "2024-02-11T09:30:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let hidden = client_for(&config_for(&mock_server, &data_dir, false)).await;
    let response = hidden.get("/admin").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let enabled = client_for(&config_for(&mock_server, &data_dir, true)).await;
    let page = enabled
        .get("/admin?filter=java")
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(page.contains("ENFP"));
    assert!(!page.contains("ISTJ"));
    assert!(page.contains("Frontend Developer (90%)"));
    assert!(page.contains("Showing 1 of 2 students"));
}

#[tokio::test]
async fn test_reset_and_health() {
    let mock_server = MockServer::start().await;
    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;

    let response = client.post("/reset").dispatch().await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/"));

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "\"OK\"");
}

#[tokio::test]
async fn test_large_skill_list_reaches_dashboard_unchanged() {
    let mock_server = MockServer::start().await;
    let skills: Vec<String> = (0..300).map(|i| format!("Skill number {:03}", i)).collect();

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "skills": skills })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/recommendations"))
        .and(body_json(json!({ "skills": skills })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recommendations": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;

    let response = client
        .post("/upload")
        .header(multipart_type())
        .body(multipart_body("resume.pdf", "application/pdf", "%PDF-1.4 fake"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);

    // The cookie carries only the session id
    let session = response
        .cookies()
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().len())
        .expect("session cookie set");
    assert!(session < 200);

    let page = client
        .get("/dashboard")
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(page.contains("Your Career Dashboard"));
}

#[tokio::test]
async fn test_zero_byte_pdf_is_uploaded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"skills": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;

    let response = client
        .post("/upload")
        .header(multipart_type())
        .body(multipart_body("empty.pdf", "application/pdf", ""))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/quiz"));
}

#[tokio::test]
async fn test_empty_file_input_asks_for_a_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"skills": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let data_dir = tempfile::tempdir().unwrap();
    let client = client_for(&config_for(&mock_server, &data_dir, false)).await;

    let response = client
        .post("/upload")
        .header(multipart_type())
        .body(multipart_body("", "application/octet-stream", ""))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let page = response.into_string().await.unwrap();
    assert!(page.contains("Please select a file first"));
}

#[tokio::test]
async fn test_unwritable_profile_gets_error_page() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, "file in the way").unwrap();

    let config = AppConfig {
        api_base_url: mock_server.uri(),
        data_dir: blocker,
        ..AppConfig::default()
    };
    let client = client_for(&config).await;

    let response = client
        .post("/quiz")
        .header(ContentType::Form)
        .body("answers=INT&choice=J")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let page = response.into_string().await.unwrap();
    assert!(page.contains("Something went wrong"));
    assert!(page.contains("Failed to access profile store"));
}
