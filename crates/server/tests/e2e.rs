use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = configs::AppConfig::default();
    let app = server::startup::build_app(&cfg);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_users_crud_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "OK");

    let res = c.post(format!("{}/api/users", app.base_url))
        .json(&json!({"name": "Dave", "email": "dave@x.com", "age": 22}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["user"]["id"], 4);

    let res = c.get(format!("{}/api/users/4", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 4, "name": "Dave", "email": "dave@x.com", "age": 22}));

    let res = c.get(format!("{}/api/users/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_cors_preflight_allowed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/users", app.base_url))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "POST")
        .send().await?;
    assert!(res.status().is_success());
    assert!(res.headers().get("access-control-allow-origin").is_some());
    Ok(())
}
