mod common;

use common::{property, room, spawn};
use imovel_manager::models::{NewProperty, PropertyPatch, RoomPayload, DEFAULT_DESCRIPTION};
use imovel_manager::{HttpPropertyApi, PropertyApi};

#[tokio::test]
async fn list_returns_nested_rooms() {
    let server = spawn(vec![property(1, "Casa", "Rua X", vec![room(2, "Sala")])]).await;
    let api = HttpPropertyApi::with_settings(&server.settings).unwrap();

    let properties = api.list_properties().await.unwrap();

    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].rooms[0].name, "Sala");
    assert_eq!(server.api.requests(), vec!["GET /imovel"]);
}

#[tokio::test]
async fn create_posts_form_payload() {
    let server = spawn(vec![]).await;
    let api = HttpPropertyApi::with_settings(&server.settings).unwrap();

    api.create_property(&NewProperty::from_form("Casa", "Rua X"))
        .await
        .unwrap();

    let stored = server.api.properties();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description.as_deref(), Some(DEFAULT_DESCRIPTION));
    assert!(stored[0].acquired_at.is_some());
    assert_eq!(server.api.requests(), vec!["POST /imovel/create"]);
}

#[tokio::test]
async fn mutations_hit_id_scoped_paths() {
    let server = spawn(vec![property(1, "Casa", "Rua X", vec![room(2, "Sala")])]).await;
    let api = HttpPropertyApi::with_settings(&server.settings).unwrap();
    let cozinha = RoomPayload {
        name: "Cozinha".to_string(),
    };

    api.add_room(1, &cozinha).await.unwrap();
    api.update_room(2, &cozinha).await.unwrap();
    api.update_property(
        1,
        &PropertyPatch {
            name: "Casa".to_string(),
            address: "Rua Z".to_string(),
            description: "Reformada".to_string(),
        },
    )
    .await
    .unwrap();
    api.delete_room(2).await.unwrap();
    api.delete_property(1).await.unwrap();

    assert_eq!(
        server.api.requests(),
        vec![
            "POST /imovel/1/comodo",
            "PATCH /comodo/2",
            "PATCH /imovel/1",
            "DELETE /comodo/2",
            "DELETE /imovel/1",
        ]
    );
    assert!(server.api.properties().is_empty());
}

#[tokio::test]
async fn not_found_status_is_an_error() {
    let server = spawn(vec![]).await;
    let api = HttpPropertyApi::with_settings(&server.settings).unwrap();

    let err = api.delete_property(42).await.unwrap_err();
    assert!(format!("{:#}", err).contains("404"), "{err:#}");

    let err = api
        .add_room(
            42,
            &RoomPayload {
                name: "Sala".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("property 42"), "{err:#}");
}
