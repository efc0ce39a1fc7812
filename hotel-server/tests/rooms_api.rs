mod common;

use common::{TestApp, deluxe_room, error_paths};
use http::StatusCode;
use serde_json::{Value, json};

async fn create_room(app: &TestApp) -> Value {
    let res = app.post("/api/room", deluxe_room()).await;
    assert_eq!(res.status, StatusCode::CREATED);
    res.body["data"].clone()
}

#[tokio::test]
async fn test_create_and_get_room() {
    let app = TestApp::spawn().await;

    let res = app.post("/api/room", deluxe_room()).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["message"], "Room created");
    let room = res.body["data"].clone();
    let id = room["RoomID"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(room["Price"], json!(1500.0));

    let res = app.get(&format!("/api/room/{id}")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], format!("Room for ID: {id}"));
    assert_eq!(res.body["data"], room);

    let res = app.get("/api/room").await;
    assert_eq!(res.body["message"], "All rooms");
    assert_eq!(res.body["data"], json!([room]));
}

#[tokio::test]
async fn test_put_replaces_whole_room() {
    let app = TestApp::spawn().await;
    let room = create_room(&app).await;
    let id = room["RoomID"].as_i64().unwrap();

    let replacement = json!({
        "RoomNumber": "202",
        "Type": "Suite",
        "Price": 4200.0,
        "Status": "Occupied"
    });
    let res = app.put(&format!("/api/room/{id}"), replacement.clone()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "Room updated");

    let mut expected = replacement;
    expected["RoomID"] = json!(id);
    assert_eq!(res.body["data"], expected);
}

#[tokio::test]
async fn test_put_missing_field_leaves_row_unchanged() {
    let app = TestApp::spawn().await;
    let room = create_room(&app).await;
    let id = room["RoomID"].as_i64().unwrap();

    let res = app
        .put(
            &format!("/api/room/{id}"),
            json!({"RoomNumber": "101", "Type": "Deluxe", "Price": 1800.0}),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&res.body), vec!["Status"]);
    assert_eq!(res.body["errors"][0]["message"], "กรุณากรอกสถานะห้อง");

    let stored = app.get(&format!("/api/room/{id}")).await.body["data"].clone();
    assert_eq!(stored, room);
}

#[tokio::test]
async fn test_put_negative_price_leaves_row_unchanged() {
    let app = TestApp::spawn().await;
    let room = create_room(&app).await;
    let id = room["RoomID"].as_i64().unwrap();

    let res = app
        .put(
            &format!("/api/room/{id}"),
            json!({
                "RoomNumber": "101",
                "Type": "Deluxe",
                "Price": -5,
                "Status": "Available"
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body,
        json!({
            "message": "Validation Error",
            "errors": [{"path": "Price", "message": "ราคาต้องมากกว่า 0"}]
        })
    );

    let stored = app.get(&format!("/api/room/{id}")).await.body["data"].clone();
    assert_eq!(stored, room);
}

#[tokio::test]
async fn test_create_rejects_wrong_types() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            "/api/room",
            json!({"RoomNumber": 101, "Type": "Deluxe", "Price": "cheap", "Status": ""}),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&res.body), vec!["RoomNumber", "Price", "Status"]);
    assert_eq!(res.body["errors"][1]["message"], "ราคาต้องเป็นตัวเลข");
    assert_eq!(app.count("Room").await, 0);
}

#[tokio::test]
async fn test_put_missing_room_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.put("/api/room/42", deluxe_room()).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({"message": "Room not found"}));
    assert_eq!(app.count("Room").await, 0);
}

#[tokio::test]
async fn test_delete_room() {
    let app = TestApp::spawn().await;
    let room = create_room(&app).await;
    let id = room["RoomID"].as_i64().unwrap();

    let res = app.delete(&format!("/api/room/{id}")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "Room deleted");
    assert_eq!(res.body["data"], room);

    let res = app.get(&format!("/api/room/{id}")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(app.count("Room").await, 0);
}

#[tokio::test]
async fn test_delete_missing_room_changes_nothing() {
    let app = TestApp::spawn().await;
    create_room(&app).await;

    let res = app.delete("/api/room/42").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "Room not found");
    assert_eq!(app.count("Room").await, 1);
}
