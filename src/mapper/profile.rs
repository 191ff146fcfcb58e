//! Profile ⇄ `ProfileWire`.

use super::WireMapped;
use crate::domain::{DateField, Profile};
use crate::wire::{EntitySchema, ProfileWire, schema};

impl WireMapped for Profile {
    type Wire = ProfileWire;

    const SCHEMA: &'static EntitySchema = &schema::PROFILE;

    fn from_wire(wire: ProfileWire) -> Self {
        Self {
            id: wire.id,
            user_id: wire.user_id,
            phone: wire.phone,
            photo: wire.photo,
            created_at: wire.created_at.map(DateField::from_wire),
            updated_at: wire.updated_at.map(DateField::from_wire),
        }
    }

    fn to_wire(&self) -> ProfileWire {
        ProfileWire {
            id: self.id,
            user_id: self.user_id,
            phone: self.phone.clone(),
            photo: self.photo.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}
