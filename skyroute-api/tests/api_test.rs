use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use skyroute_api::{app, AppState};
use skyroute_store::app_config::{CabinConfig, SearchConfig};
use skyroute_store::{DatasetState, FlightLoader, JsonFlightRepository};
use std::sync::Arc;
use tower::ServiceExt;

const FLIGHTS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/flights.json");

async fn loaded_state() -> AppState {
    let state = AppState::new(SearchConfig::default(), CabinConfig::default());
    let repository = JsonFlightRepository::new(FLIGHTS_PATH);
    state
        .spawn_loader(FlightLoader::new(Arc::new(repository)))
        .await
        .unwrap();
    state
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn departures(view: &Value) -> Vec<String> {
    view["flights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["flight"]["departureDateTimeDisplay"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_flights_sorted_by_eco_fly_price() {
    let app = app(loaded_state().await);
    let (status, view) = send(
        app,
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB", "passengerCount": 2 } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "ready");
    assert_eq!(view["sortBy"], "ecoFlyPrice");
    // SAW departures belong to the Istanbul city code too; the flight
    // without an ecoFly fare goes last
    assert_eq!(departures(&view), vec!["7:30", "10:45", "12:30", "09:00", "18:15"]);
    assert_eq!(view["flights"][0]["ecoFlyPrice"], 285.0);
    assert!(view["flights"][4]["ecoFlyPrice"].is_null());
    assert_eq!(view["flights"][4]["lowestEconomyPrice"], 480.0);
    assert_eq!(view["header"]["fromCityName"], "İstanbul");
    assert_eq!(view["header"]["toCityName"], "Ankara");
    assert_eq!(view["header"]["passengerCount"], 2);
}

#[tokio::test]
async fn test_flights_sorted_by_departure_string() {
    let app = app(loaded_state().await);
    let (_, view) = send(
        app,
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB" }, "sortBy": "departureTime" })),
    )
    .await;

    assert_eq!(departures(&view), vec!["09:00", "10:45", "12:30", "18:15", "7:30"]);
}

#[tokio::test]
async fn test_promo_halves_eco_fly_prices() {
    let app = app(loaded_state().await);
    let (_, view) = send(
        app,
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB" }, "promoActive": true })),
    )
    .await;

    assert_eq!(view["promoCodeActive"], true);
    assert_eq!(view["flights"][0]["ecoFlyPrice"], 142.5);
    assert_eq!(view["flights"][0]["lowestEconomyPrice"], 142.5);
    // Business fares ignore the promo
    assert_eq!(view["flights"][0]["businessPrice"], 1390.0);
}

#[tokio::test]
async fn test_redirect_without_criteria() {
    let app = app(loaded_state().await);
    let (status, view) = send(app, "POST", "/v1/flights", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view, json!({ "status": "redirect" }));
}

#[tokio::test]
async fn test_loading_view_before_dataset_arrives() {
    let state = AppState::new(SearchConfig::default(), CabinConfig::default());
    let (_, view) = send(
        app(state),
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB" } })),
    )
    .await;

    assert_eq!(view, json!({ "status": "loading" }));
}

#[tokio::test]
async fn test_criteria_values_pass_through_to_view() {
    let app = app(loaded_state().await);
    let (status, view) = send(
        app.clone(),
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB", "passengerCount": 0 } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "ready");
    assert_eq!(view["header"]["passengerCount"], 0);
    assert_eq!(view["flights"].as_array().unwrap().len(), 5);

    // Unknown codes simply match nothing
    let (status, view) = send(
        app,
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "", "to": "ESB" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "ready");
    assert_eq!(view["flights"], json!([]));
    assert_eq!(view["header"]["fromCityName"], "");
    assert_eq!(view["header"]["toCityName"], "ESB");
}

#[tokio::test]
async fn test_toggle_expansion_round_trip() {
    let app = app(loaded_state().await);
    let toggle = json!({ "flightKey": "IST-ESB-09:00", "section": "BUSINESS" });

    let (_, view) = send(
        app.clone(),
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB" }, "toggle": toggle })),
    )
    .await;
    assert_eq!(view["expanded"], toggle);
    let expanded: Vec<&Value> = view["flights"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| !f["packages"].as_array().unwrap().is_empty())
        .collect();
    assert_eq!(expanded.len(), 1);
    assert_eq!(expanded[0]["key"], "IST-ESB-09:00");
    assert_eq!(expanded[0]["packages"][0]["brandCode"], "business");

    // Same toggle again collapses
    let (_, view) = send(
        app,
        "POST",
        "/v1/flights",
        Some(json!({
            "criteria": { "from": "IST", "to": "ESB" },
            "expanded": view["expanded"].clone(),
            "toggle": toggle,
        })),
    )
    .await;
    assert_eq!(view["expanded"], json!({ "flightKey": null, "section": null }));
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let app = app(loaded_state().await);

    let (_, cities) = send(app.clone(), "GET", "/v1/cities", None).await;
    let codes: Vec<&str> = cities.as_array().unwrap().iter().map(|c| c["value"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["IST", "ESB", "AYT", "ADB"]);

    let (_, destinations) = send(app.clone(), "GET", "/v1/destinations?origin=IST", None).await;
    let codes: Vec<&str> = destinations.as_array().unwrap().iter().map(|c| c["value"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["ESB", "AYT", "ADB"]);

    let (_, popular) = send(app.clone(), "GET", "/v1/routes/popular", None).await;
    let popular = popular.as_array().unwrap();
    assert_eq!(popular.len(), 5);
    assert_eq!(popular[0]["value"], "IST-ESB");
    assert_eq!(popular[0]["label"], "İstanbul → Ankara");
    assert_eq!(popular[0]["price"], 285.0);
    assert_eq!(popular[0]["times"].as_array().unwrap().len(), 5);
    assert_eq!(popular[1]["value"], "ESB-IST");
    assert_eq!(popular[2]["value"], "IST-AYT");

    let (_, validity) = send(
        app.clone(),
        "POST",
        "/v1/routes/validate",
        Some(json!({ "from": { "value": "ADB", "label": "İzmir" }, "to": { "value": "AYT", "label": "Antalya" } })),
    )
    .await;
    assert_eq!(validity, json!({ "valid": true }));

    let (_, validity) = send(
        app,
        "POST",
        "/v1/routes/validate",
        Some(json!({ "from": { "value": "AYT", "label": "Antalya" }, "to": null })),
    )
    .await;
    assert_eq!(validity, json!({ "valid": false }));
}

#[tokio::test]
async fn test_search_submission_and_recent_history() {
    let app = app(loaded_state().await);

    let (status, submission) = send(
        app.clone(),
        "POST",
        "/v1/search",
        Some(json!({
            "from": { "value": "IST", "label": "İstanbul" },
            "to": { "value": "AYT", "label": "Antalya" },
            "passengerCount": 3,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        submission,
        json!({ "from": "IST", "to": "AYT", "passengerCount": 3, "cabin": "economy" })
    );

    let (status, body) = send(
        app.clone(),
        "POST",
        "/v1/search",
        Some(json!({
            "from": { "value": "ADB", "label": "İzmir" },
            "to": { "value": "ESB", "label": "Ankara" },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (_, recent) = send(app.clone(), "GET", "/v1/recent", None).await;
    assert_eq!(recent.as_array().unwrap().len(), 1);
    assert_eq!(recent[0]["to"]["value"], "AYT");

    let (_, options) = send(app, "GET", "/v1/search/options?from=IST", None).await;
    assert_eq!(options["loading"], false);
    assert_eq!(options["fromOptions"][0]["value"], "IST");
    assert_eq!(options["fromOptions"][0]["recent"], true);
    assert_eq!(options["toOptions"][0]["value"], "AYT");
    assert_eq!(options["toOptions"][0]["recent"], true);
    assert_eq!(options["toOptions"][1]["value"], "ESB");
}

#[tokio::test]
async fn test_fare_selection_handoff() {
    let app = app(loaded_state().await);

    let (status, body) = send(
        app.clone(),
        "POST",
        "/v1/fares/select",
        Some(json!({ "flightKey": "IST-ESB-09:00", "section": "ECONOMY", "brandCode": "extraFly" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selection"]["status"], "AVAILABLE");
    assert_eq!(body["selection"]["selectedFare"]["price"]["amount"], 515.0);
    assert_eq!(body["selection"]["flightDetails"]["departureDateTimeDisplay"], "09:00");
    assert_eq!(body["summary"], json!({ "status": "AVAILABLE", "amount": 515.0, "currency": "TRY" }));

    let (status, _) = send(
        app.clone(),
        "POST",
        "/v1/fares/select",
        Some(json!({ "flightKey": "IST-ESB-23:59", "section": "ECONOMY", "brandCode": "ecoFly" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, summary) = send(app, "GET", "/v1/cabin-selection", None).await;
    assert_eq!(summary, json!({ "status": "AVAILABLE", "amount": 470.0, "currency": "TRY" }));
}

#[tokio::test]
async fn test_unavailable_fare_cannot_be_selected() {
    let app = app(loaded_state().await);
    let (status, body) = send(
        app,
        "POST",
        "/v1/fares/select",
        Some(json!({ "flightKey": "IST-ESB-12:30", "section": "ECONOMY", "brandCode": "ecoFly" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("not available"));
}

#[tokio::test]
async fn test_promo_restricts_selection_to_eco_fly() {
    let app = app(loaded_state().await);

    let (status, body) = send(
        app.clone(),
        "POST",
        "/v1/fares/select",
        Some(json!({
            "flightKey": "IST-ESB-09:00",
            "section": "ECONOMY",
            "brandCode": "extraFly",
            "promoActive": true,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("extraFly"));

    let (status, body) = send(
        app,
        "POST",
        "/v1/fares/select",
        Some(json!({
            "flightKey": "IST-ESB-09:00",
            "section": "ECONOMY",
            "brandCode": "ecoFly",
            "promoActive": true,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selection"]["selectedFare"]["brandCode"], "ecoFly");
}

#[tokio::test]
async fn test_unavailable_dataset_serves_empty_results() {
    let state = AppState::new(SearchConfig::default(), CabinConfig::default());
    let repository = JsonFlightRepository::new("/nonexistent/flights.json");
    state
        .spawn_loader(FlightLoader::new(Arc::new(repository)))
        .await
        .unwrap();
    assert!(matches!(*state.dataset.read().await, DatasetState::Unavailable));
    let app = app(state);

    let (status, cities) = send(app.clone(), "GET", "/v1/cities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cities, json!([]));

    let (_, view) = send(
        app.clone(),
        "POST",
        "/v1/flights",
        Some(json!({ "criteria": { "from": "IST", "to": "ESB" } })),
    )
    .await;
    assert_eq!(view["status"], "ready");
    assert_eq!(view["flights"], json!([]));
    assert_eq!(view["header"]["fromCityName"], "IST");

    let (status, _) = send(
        app,
        "POST",
        "/v1/search",
        Some(json!({
            "from": { "value": "IST", "label": "İstanbul" },
            "to": { "value": "ESB", "label": "Ankara" },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
