//! Session ⇄ `SessionWire`.

use super::WireMapped;
use crate::domain::{DateField, Session, SessionState};
use crate::wire::{EntitySchema, SessionWire, schema};

impl WireMapped for Session {
    type Wire = SessionWire;

    const SCHEMA: &'static EntitySchema = &schema::SESSION;

    fn from_wire(wire: SessionWire) -> Self {
        Self {
            id: wire.id,
            user_id: wire.user_id,
            token: wire.token,
            expiration: wire.expiration.map(DateField::from_wire),
            fa_code: wire.fa_code,
            state: wire.state.map(SessionState::from),
            created_at: wire.created_at.map(DateField::from_wire),
            updated_at: wire.updated_at.map(DateField::from_wire),
            user: wire.user,
        }
    }

    fn to_wire(&self) -> SessionWire {
        SessionWire {
            id: self.id.clone(),
            user_id: self.user_id,
            token: self.token.clone(),
            expiration: self.expiration.as_ref().map(DateField::to_wire),
            fa_code: self.fa_code.clone(),
            state: self.state.clone().map(String::from),
            created_at: None,
            updated_at: None,
            user: None,
        }
    }
}
