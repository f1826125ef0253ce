use std::net::SocketAddr;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::gate::AdminCredentials;
use server::{routes, AppState};

const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "test-password";

struct TestApp {
    base_url: String,
}

/// Boot the full router on an ephemeral port against a fresh in-memory
/// database; each test gets its own isolated instance.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;

    let state = AppState {
        db,
        admin: AdminCredentials::new(ADMIN_USER.into(), ADMIN_PASS.into()),
    };
    let app = routes::build_router(CorsLayer::very_permissive(), state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}", addr) })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn admin_post(&self, path: &str, body: Value) -> reqwest::Result<reqwest::Response> {
        client()
            .post(self.url(path))
            .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
            .json(&body)
            .send()
            .await
    }
}

#[tokio::test]
async fn health_and_openapi_are_public() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");

    let res = client().get(app.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(res.status(), 200);
    let doc: Value = res.json().await?;
    assert!(doc["paths"]["/admin/event-attendance"].is_object());
    Ok(())
}

#[tokio::test]
async fn admin_gate_requires_valid_credentials() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(app.url("/admin/events")).send().await?;
    assert_eq!(res.status(), 401);
    assert_eq!(
        res.headers().get("www-authenticate").and_then(|v| v.to_str().ok()),
        Some("Basic realm=\"Admin Area\"")
    );
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Unauthorized");

    let res = client()
        .get(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some("wrong"))
        .send()
        .await?;
    assert_eq!(res.status(), 401);

    let res = client()
        .get(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn attendance_registration_scenario() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app
        .admin_post(
            "/admin/events",
            json!({
                "title": "Welcome Reception",
                "date": "2025-08-15",
                "startTime": "10:00",
                "endTime": "12:00"
            }),
        )
        .await?;
    assert_eq!(res.status(), 200);
    let event: Value = res.json().await?;
    assert_eq!(event["id"], 1);
    assert_eq!(event["startTime"], "10:00");

    let res = app
        .admin_post("/admin/attendees", json!({"firstName": "Alice", "lastName": "Johnson"}))
        .await?;
    assert_eq!(res.status(), 200);
    let attendee: Value = res.json().await?;
    assert_eq!(attendee["id"], 1);

    let res = app
        .admin_post(
            "/admin/event-attendance",
            json!({"eventId": 1, "attendeeId": 1, "status": "Confirmed"}),
        )
        .await?;
    assert_eq!(res.status(), 200);
    let link: Value = res.json().await?;
    assert_eq!(link["eventId"], 1);
    assert_eq!(link["attendeeId"], 1);
    assert_eq!(link["status"], "Confirmed");

    // repeating the same call conflicts
    let res = app
        .admin_post(
            "/admin/event-attendance",
            json!({"eventId": 1, "attendeeId": 1, "status": "Confirmed"}),
        )
        .await?;
    assert_eq!(res.status(), 409);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Already registered for this event");

    // unknown event id
    let res = app
        .admin_post(
            "/admin/event-attendance",
            json!({"eventId": 999, "attendeeId": 1, "status": "Confirmed"}),
        )
        .await?;
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Event not found");

    // missing status
    let res = app
        .admin_post("/admin/event-attendance", json!({"eventId": 1, "attendeeId": 1}))
        .await?;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Missing required fields");

    let res = client()
        .get(app.url("/admin/event-attendance"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await?;
    let links: Value = res.json().await?;
    assert_eq!(links.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn admin_update_and_delete_contracts() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.admin_post("/admin/events", json!({"title": "Quiz Night", "status": "Draft"})).await?;
    let event: Value = res.json().await?;
    let id = event["id"].as_i64().unwrap();

    // update without id
    let res = client()
        .put(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"status": "Confirmed"}))
        .send()
        .await?;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Event ID is required");

    // partial merge keeps the other fields
    let res = client()
        .put(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"id": id, "status": "Confirmed"}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let updated: Value = res.json().await?;
    assert_eq!(updated["status"], "Confirmed");
    assert_eq!(updated["title"], "Quiz Night");

    // unknown id
    let res = client()
        .put(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"id": 999, "status": "Confirmed"}))
        .send()
        .await?;
    assert_eq!(res.status(), 404);

    let res = client()
        .delete(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"id": id}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Event deleted successfully");

    let res = client()
        .delete(app.url("/admin/events"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"id": id}))
        .send()
        .await?;
    assert_eq!(res.status(), 404);
    Ok(())
}

#[tokio::test]
async fn attendance_delete_returns_the_record() -> anyhow::Result<()> {
    let app = start_server().await?;

    app.admin_post("/admin/events", json!({"title": "City Tour"})).await?;
    app.admin_post("/admin/attendees", json!({"firstName": "Bob", "lastName": "Wilson"})).await?;
    let res = app
        .admin_post("/admin/event-attendance", json!({"eventId": 1, "attendeeId": 1, "status": "Maybe"}))
        .await?;
    let link: Value = res.json().await?;

    let res = client()
        .delete(app.url("/admin/event-attendance"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"id": link["id"]}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Attendance record deleted successfully");
    assert_eq!(body["deletedRecord"]["id"], link["id"]);
    assert_eq!(body["deletedRecord"]["status"], "Maybe");
    Ok(())
}

#[tokio::test]
async fn public_registration_and_rsvp() -> anyhow::Result<()> {
    let app = start_server().await?;

    // missing last name
    let res = client()
        .post(app.url("/register"))
        .json(&json!({"firstName": "Bob"}))
        .send()
        .await?;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "First name and last name are required");

    let res = client()
        .post(app.url("/register"))
        .json(&json!({"firstName": "Bob", "lastName": "Wilson", "email": "bob@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Registration successful!");
    assert_eq!(body["attendee"]["isConfirmed"], false);
    assert_eq!(body["attendee"]["isAdult"], true);
    let attendee_id = body["attendee"]["id"].as_i64().unwrap();

    // duplicate email
    let res = client()
        .post(app.url("/register"))
        .json(&json!({"firstName": "Robert", "lastName": "Wilson", "email": "bob@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), 409);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "An attendee with this email already exists");

    // self-RSVP runs through the same validation as the admin create
    app.admin_post("/admin/events", json!({"title": "Welcome Reception"})).await?;
    let res = client()
        .post(app.url("/event-attendance"))
        .json(&json!({"eventId": 1, "attendeeId": attendee_id, "status": "Confirmed"}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);

    let res = client()
        .post(app.url("/event-attendance"))
        .json(&json!({"eventId": 1, "attendeeId": attendee_id, "status": "Confirmed"}))
        .send()
        .await?;
    assert_eq!(res.status(), 409);
    Ok(())
}

#[tokio::test]
async fn public_search_contract() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(app.url("/attendees/search?name=a")).send().await?;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Name must be at least 2 characters");

    client()
        .post(app.url("/register"))
        .json(&json!({"firstName": "Alice", "lastName": "Johnson"}))
        .send()
        .await?;
    app.admin_post("/admin/events", json!({"title": "Welcome Reception", "date": "2025-08-15"})).await?;
    app.admin_post("/admin/event-attendance", json!({"eventId": 1, "attendeeId": 1, "status": "Confirmed"}))
        .await?;

    let res = client().get(app.url("/attendees/search?name=ALICE")).send().await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    let matches = body["attendees"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["firstName"], "Alice");
    assert_eq!(matches[0]["events"][0]["eventTitle"], "Welcome Reception");
    assert_eq!(matches[0]["events"][0]["status"], "Confirmed");

    let res = client().get(app.url("/attendees/search?name=nobody")).send().await?;
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "No attendees found with that name");
    Ok(())
}

#[tokio::test]
async fn public_event_and_accommodation_reads() -> anyhow::Result<()> {
    let app = start_server().await?;
    let today = chrono::Local::now().date_naive();

    app.admin_post(
        "/admin/events",
        json!({"title": "Past", "date": (today - chrono::Duration::days(1)).to_string()}),
    )
    .await?;
    for i in 0..7 {
        app.admin_post(
            "/admin/events",
            json!({"title": format!("Day {}", i), "date": (today + chrono::Duration::days(i)).to_string()}),
        )
        .await?;
    }

    let res = client().get(app.url("/events")).send().await?;
    let events: Value = res.json().await?;
    assert_eq!(events.as_array().map(Vec::len), Some(7));

    let res = client().get(app.url("/events/upcoming")).send().await?;
    let upcoming: Value = res.json().await?;
    assert_eq!(upcoming.as_array().map(Vec::len), Some(6));

    let res = client().get(app.url("/events/999")).send().await?;
    assert_eq!(res.status(), 404);

    app.admin_post("/admin/accommodations", json!({"name": "Seaside Hotel", "capacity": 40})).await?;
    let res = client().get(app.url("/accommodations")).send().await?;
    assert_eq!(res.status(), 200);
    let list: Value = res.json().await?;
    assert_eq!(list[0]["name"], "Seaside Hotel");

    let res = client().get(app.url("/accommodations/1")).send().await?;
    assert_eq!(res.status(), 200);

    let res = client().get(app.url("/accommodations/1/attendees")).send().await?;
    assert_eq!(res.status(), 200);
    let residents: Value = res.json().await?;
    assert_eq!(residents, json!([]));

    // roster for an event
    client()
        .post(app.url("/register"))
        .json(&json!({"firstName": "Alice", "lastName": "Johnson", "countryId": "IE"}))
        .send()
        .await?;
    app.admin_post("/admin/event-attendance", json!({"eventId": 2, "attendeeId": 1, "status": "Confirmed"}))
        .await?;
    let res = client().get(app.url("/events/2/attendees")).send().await?;
    let roster: Value = res.json().await?;
    assert_eq!(roster[0]["firstName"], "Alice");
    assert_eq!(roster[0]["status"], "Confirmed");

    // names autocomplete
    let res = client().get(app.url("/attendees/names")).send().await?;
    let names: Value = res.json().await?;
    assert_eq!(names["names"][0]["fullName"], "Alice Johnson");

    // stats reflect the seeded data
    let res = client()
        .get(app.url("/admin/stats"))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await?;
    let stats: Value = res.json().await?;
    assert_eq!(stats["eventCount"], 8);
    assert_eq!(stats["attendeeCount"], 1);
    assert_eq!(stats["accommodationCount"], 1);
    Ok(())
}
