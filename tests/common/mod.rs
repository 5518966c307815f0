//! In-process stand-in for the imóvel API
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use imovel_manager::models::{NewProperty, Property, PropertyPatch, Room, RoomPayload};
use imovel_manager::ApiSettings;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    properties: Vec<Property>,
    requests: Vec<String>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn room_mut(&mut self, id: i64) -> Option<&mut Room> {
        self.properties
            .iter_mut()
            .flat_map(|p| p.rooms.iter_mut())
            .find(|r| r.id == id)
    }
}

#[derive(Clone, Default)]
pub struct FakeApi {
    store: Arc<Mutex<Store>>,
}

impl FakeApi {
    pub fn properties(&self) -> Vec<Property> {
        self.store.lock().unwrap().properties.clone()
    }

    /// Method and path of every request received, in order
    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }

    fn record(&self, request: String) -> std::sync::MutexGuard<'_, Store> {
        let mut store = self.store.lock().unwrap();
        store.requests.push(request);
        store
    }
}

async fn list(State(api): State<FakeApi>) -> Json<Vec<Property>> {
    let store = api.record("GET /imovel".to_string());
    Json(store.properties.clone())
}

async fn create(
    State(api): State<FakeApi>,
    Json(new): Json<NewProperty>,
) -> (StatusCode, Json<Property>) {
    let mut store = api.record("POST /imovel/create".to_string());
    let property = Property {
        id: store.next_id(),
        name: new.name,
        address: new.address,
        description: Some(new.description),
        acquired_at: Some(new.acquired_at),
        rooms: vec![],
    };
    store.properties.push(property.clone());
    (StatusCode::CREATED, Json(property))
}

async fn add_room(
    State(api): State<FakeApi>,
    Path(property_id): Path<i64>,
    Json(room): Json<RoomPayload>,
) -> Result<(StatusCode, Json<Room>), StatusCode> {
    let mut store = api.record(format!("POST /imovel/{}/comodo", property_id));
    let room = Room {
        id: store.next_id(),
        name: room.name,
    };
    let property = store
        .properties
        .iter_mut()
        .find(|p| p.id == property_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    property.rooms.push(room.clone());
    Ok((StatusCode::CREATED, Json(room)))
}

async fn update_property(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    Json(patch): Json<PropertyPatch>,
) -> Result<Json<Property>, StatusCode> {
    let mut store = api.record(format!("PATCH /imovel/{}", id));
    let property = store
        .properties
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    property.name = patch.name;
    property.address = patch.address;
    property.description = Some(patch.description);
    Ok(Json(property.clone()))
}

async fn delete_property(State(api): State<FakeApi>, Path(id): Path<i64>) -> StatusCode {
    let mut store = api.record(format!("DELETE /imovel/{}", id));
    let before = store.properties.len();
    store.properties.retain(|p| p.id != id);
    if store.properties.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn update_room(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomPayload>,
) -> Result<Json<Room>, StatusCode> {
    let mut store = api.record(format!("PATCH /comodo/{}", id));
    let room = store.room_mut(id).ok_or(StatusCode::NOT_FOUND)?;
    room.name = payload.name;
    Ok(Json(room.clone()))
}

async fn delete_room(State(api): State<FakeApi>, Path(id): Path<i64>) -> StatusCode {
    let mut store = api.record(format!("DELETE /comodo/{}", id));
    let mut removed = false;
    for property in store.properties.iter_mut() {
        let before = property.rooms.len();
        property.rooms.retain(|r| r.id != id);
        removed |= property.rooms.len() < before;
    }
    if removed {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

pub struct FakeServer {
    pub api: FakeApi,
    pub settings: ApiSettings,
}

/// Serve the fake API on an ephemeral local port, seeded with `properties`
pub async fn spawn(properties: Vec<Property>) -> FakeServer {
    let next_id = properties
        .iter()
        .flat_map(|p| std::iter::once(p.id).chain(p.rooms.iter().map(|r| r.id)))
        .max()
        .unwrap_or(0);
    let api = FakeApi {
        store: Arc::new(Mutex::new(Store {
            next_id,
            properties,
            requests: Vec::new(),
        })),
    };

    let app = Router::new()
        .route("/imovel", get(list))
        .route("/imovel/create", post(create))
        .route("/imovel/{id}", patch(update_property).delete(delete_property))
        .route("/imovel/{id}/comodo", post(add_room))
        .route("/comodo/{id}", patch(update_room).delete(delete_room))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer {
        api,
        settings: ApiSettings {
            base_url: format!("http://{}", addr),
            timeout_seconds: Some(5),
        },
    }
}

pub fn room(id: i64, name: &str) -> Room {
    Room {
        id,
        name: name.to_string(),
    }
}

pub fn property(id: i64, name: &str, address: &str, rooms: Vec<Room>) -> Property {
    Property {
        id,
        name: name.to_string(),
        address: address.to_string(),
        description: None,
        acquired_at: None,
        rooms,
    }
}
