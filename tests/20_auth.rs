mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn jwt_endpoint_issues_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/jwt", server.base_url))
        .json(&json!({ "email": "token-check@example.com" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    let token = body["data"]["token"].as_str().unwrap_or_default();
    // Compact JWS: three dot-separated segments
    assert_eq!(token.split('.').count(), 3, "not a JWT: {}", token);
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_missing_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/user/anyone@example.com", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_malformed_authorization() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Wrong scheme
    let res = client
        .get(format!("{}/products/user/anyone@example.com", server.base_url))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let res = client
        .get(format!("{}/products/user/anyone@example.com", server.base_url))
        .header("Authorization", "Bearer not.a.jwt")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn moderator_route_requires_a_token_before_any_role_check() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/reported", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
