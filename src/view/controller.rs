//! View state for the imóvel page and the actions a user can trigger on it.
//!
//! The property list is never edited locally: every action that mutates the
//! remote side finishes by reloading the full list, so what is shown is always
//! the last snapshot the API returned.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::api::PropertyApi;
use crate::models::{NewProperty, Property, PropertyPatch, Room, RoomPayload};

/// Edit buffer of the property currently in edit mode
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEdit {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
}

impl PropertyEdit {
    fn from_property(property: &Property) -> Self {
        Self {
            id: property.id,
            name: property.name.clone(),
            address: property.address.clone(),
            description: property.description.clone().unwrap_or_default(),
        }
    }

    fn to_patch(&self) -> PropertyPatch {
        PropertyPatch {
            name: self.name.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
        }
    }
}

/// Edit buffer of the room currently in edit mode
#[derive(Debug, Clone, PartialEq)]
pub struct RoomEdit {
    pub id: i64,
    pub name: String,
}

/// Field of the property edit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    Name,
    Address,
    Description,
}

/// State and actions of the property management view.
///
/// At most one property and one room are in edit mode at a time; beginning a
/// new edit drops the previous buffer without saving it.
pub struct ViewController {
    api: Arc<dyn PropertyApi>,
    properties: Vec<Property>,
    new_property_name: String,
    new_property_address: String,
    new_room_name: String,
    selected_property: Option<i64>,
    property_edit: Option<PropertyEdit>,
    room_edit: Option<RoomEdit>,
}

impl std::fmt::Debug for ViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("properties", &self.properties.len())
            .field("selected_property", &self.selected_property)
            .field("property_edit", &self.property_edit)
            .field("room_edit", &self.room_edit)
            .finish()
    }
}

impl ViewController {
    pub fn new(api: Arc<dyn PropertyApi>) -> Self {
        Self {
            api,
            properties: Vec::new(),
            new_property_name: String::new(),
            new_property_address: String::new(),
            new_room_name: String::new(),
            selected_property: None,
            property_edit: None,
            room_edit: None,
        }
    }

    /// Create the controller and perform the initial load
    pub async fn mount(api: Arc<dyn PropertyApi>) -> Self {
        let mut controller = Self::new(api);
        controller.load().await;
        controller
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, id: i64) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    fn find_room(&self, id: i64) -> Option<&Room> {
        self.properties.iter().find_map(|p| p.room(id))
    }

    pub fn new_property_name(&self) -> &str {
        &self.new_property_name
    }

    pub fn new_property_address(&self) -> &str {
        &self.new_property_address
    }

    pub fn selected_property(&self) -> Option<i64> {
        self.selected_property
    }

    /// Value shown in the new-room input of `property_id`; only the selected
    /// property's input shows the typed text.
    pub fn new_room_value(&self, property_id: i64) -> &str {
        if self.selected_property == Some(property_id) {
            &self.new_room_name
        } else {
            ""
        }
    }

    pub fn property_edit(&self) -> Option<&PropertyEdit> {
        self.property_edit.as_ref()
    }

    pub fn room_edit(&self) -> Option<&RoomEdit> {
        self.room_edit.as_ref()
    }

    pub fn set_new_property_name(&mut self, name: impl Into<String>) {
        self.new_property_name = name.into();
    }

    pub fn set_new_property_address(&mut self, address: impl Into<String>) {
        self.new_property_address = address.into();
    }

    /// Focus the new-room input of a property. Moving to another property
    /// starts from an empty input. Returns false if it is not in the list.
    pub fn select_property(&mut self, property_id: i64) -> bool {
        if self.property(property_id).is_none() {
            debug!("Property {} not loaded, cannot select", property_id);
            return false;
        }
        if self.selected_property != Some(property_id) {
            self.selected_property = Some(property_id);
            self.new_room_name.clear();
        }
        true
    }

    /// Type into the new-room input of a property, selecting it. Returns
    /// false if it is not in the list.
    pub fn type_room_name(&mut self, property_id: i64, name: impl Into<String>) -> bool {
        if self.property(property_id).is_none() {
            debug!("Property {} not loaded, cannot select", property_id);
            return false;
        }
        self.selected_property = Some(property_id);
        self.new_room_name = name.into();
        true
    }

    /// Replace the list with the API's current snapshot.
    ///
    /// On failure the error is logged and the previous list is kept.
    pub async fn load(&mut self) {
        match self.api.list_properties().await {
            Ok(properties) => {
                debug!("Loaded {} properties", properties.len());
                self.properties = properties;
            }
            Err(e) => error!("Erro ao buscar imóveis: {:#}", e),
        }
    }

    /// Submit the create form. Both fields are required; with either one
    /// empty nothing is sent.
    pub async fn create_property(&mut self) {
        if self.new_property_name.is_empty() || self.new_property_address.is_empty() {
            debug!("Create form incomplete, not submitting");
            return;
        }

        let payload = NewProperty::from_form(
            self.new_property_name.clone(),
            self.new_property_address.clone(),
        );
        info!("Creating property '{}'", payload.name);
        if let Err(e) = self.api.create_property(&payload).await {
            warn!("Create property failed: {:#}", e);
        }

        self.new_property_name.clear();
        self.new_property_address.clear();
        self.load().await;
    }

    /// Submit the new-room form of the selected property. Without a selected
    /// property or a room name nothing is sent.
    pub async fn add_room(&mut self) {
        let Some(property_id) = self.selected_property else {
            debug!("No property selected, not adding room");
            return;
        };
        if self.property(property_id).is_none() {
            debug!("Selected property {} no longer listed, not adding room", property_id);
            return;
        }
        if self.new_room_name.is_empty() {
            debug!("Room name empty, not adding room");
            return;
        }

        let payload = RoomPayload {
            name: self.new_room_name.clone(),
        };
        info!("Adding room '{}' to property {}", payload.name, property_id);
        if let Err(e) = self.api.add_room(property_id, &payload).await {
            warn!("Add room to property {} failed: {:#}", property_id, e);
        }

        self.new_room_name.clear();
        self.load().await;
    }

    pub async fn delete_property(&mut self, id: i64) {
        info!("Deleting property {}", id);
        if let Err(e) = self.api.delete_property(id).await {
            warn!("Delete property {} failed: {:#}", id, e);
        }
        self.load().await;
    }

    pub async fn delete_room(&mut self, id: i64) {
        info!("Deleting room {}", id);
        if let Err(e) = self.api.delete_room(id).await {
            warn!("Delete room {} failed: {:#}", id, e);
        }
        self.load().await;
    }

    /// Put a property in edit mode. Returns false if it is not in the list.
    pub fn begin_edit_property(&mut self, id: i64) -> bool {
        let Some(property) = self.property(id) else {
            debug!("Property {} not loaded, cannot edit", id);
            return false;
        };
        let edit = PropertyEdit::from_property(property);

        if let Some(previous) = self.property_edit.replace(edit) {
            if previous.id != id {
                debug!("Discarding unsaved edit of property {}", previous.id);
            }
        }
        true
    }

    /// Put a room in edit mode. Returns false if it is not in the list.
    pub fn begin_edit_room(&mut self, id: i64) -> bool {
        let Some(room) = self.find_room(id) else {
            debug!("Room {} not loaded, cannot edit", id);
            return false;
        };
        let edit = RoomEdit {
            id: room.id,
            name: room.name.clone(),
        };

        if let Some(previous) = self.room_edit.replace(edit) {
            if previous.id != id {
                debug!("Discarding unsaved edit of room {}", previous.id);
            }
        }
        true
    }

    pub fn edit_property_field(&mut self, field: PropertyField, value: impl Into<String>) {
        let Some(edit) = self.property_edit.as_mut() else {
            return;
        };
        let value = value.into();
        match field {
            PropertyField::Name => edit.name = value,
            PropertyField::Address => edit.address = value,
            PropertyField::Description => edit.description = value,
        }
    }

    pub fn edit_room_name(&mut self, name: impl Into<String>) {
        if let Some(edit) = self.room_edit.as_mut() {
            edit.name = name.into();
        }
    }

    pub fn cancel_property_edit(&mut self) {
        self.property_edit = None;
    }

    pub fn cancel_room_edit(&mut self) {
        self.room_edit = None;
    }

    /// Save the property edit buffer and leave edit mode
    pub async fn save_property(&mut self) {
        let Some(edit) = self.property_edit.clone() else {
            debug!("No property in edit mode");
            return;
        };

        info!("Saving property {}", edit.id);
        if let Err(e) = self.api.update_property(edit.id, &edit.to_patch()).await {
            warn!("Update property {} failed: {:#}", edit.id, e);
        }

        self.property_edit = None;
        self.load().await;
    }

    /// Save the room edit buffer and leave edit mode
    pub async fn save_room(&mut self) {
        let Some(edit) = self.room_edit.clone() else {
            debug!("No room in edit mode");
            return;
        };

        let payload = RoomPayload {
            name: edit.name.clone(),
        };
        info!("Saving room {}", edit.id);
        if let Err(e) = self.api.update_room(edit.id, &payload).await {
            warn!("Update room {} failed: {:#}", edit.id, e);
        }

        self.room_edit = None;
        self.load().await;
    }
}
