mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn lists_states_as_camel_case_dtos() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    let res = server
        .client
        .get(server.url("/states/"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let states = res.json::<Vec<Value>>().await?;
    assert_eq!(states.len(), 3);
    assert_eq!(
        states[0],
        json!({ "stateId": 1, "stateName": "Andaman and Nicobar Islands", "population": 380581 })
    );
    Ok(())
}

#[tokio::test]
async fn gets_one_state() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    let res = server
        .client
        .get(server.url("/states/2/"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "stateId": 2, "stateName": "Andhra Pradesh", "population": 49577103 })
    );
    Ok(())
}

#[tokio::test]
async fn unknown_state_is_not_found() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    let res = server
        .client
        .get(server.url("/states/999/"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "State Not Found");
    Ok(())
}

#[tokio::test]
async fn non_numeric_state_id_is_a_bad_request() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    let res = server
        .client
        .get(server.url("/states/1 OR 1=1/"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn stats_sum_every_district_of_the_state() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    let res = server
        .client
        .get(server.url("/states/1/stats/"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "totalCases": 30, "totalCured": 20, "totalActive": 4, "totalDeaths": 6 })
    );
    Ok(())
}

#[tokio::test]
async fn stats_of_state_without_districts_are_zero() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    let res = server
        .client
        .get(server.url("/states/3/stats/"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "totalCases": 0, "totalCured": 0, "totalActive": 0, "totalDeaths": 0 })
    );
    Ok(())
}

#[tokio::test]
async fn routes_answer_without_trailing_slash() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.login().await?;

    for path in ["/states", "/states/1", "/states/1/stats"] {
        let res = server
            .client
            .get(server.url(path))
            .bearer_auth(&token)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "{path}");
    }
    Ok(())
}
