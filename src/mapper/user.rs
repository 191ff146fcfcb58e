//! User and relation records ⇄ their wire records.

use super::WireMapped;
use crate::domain::{Address, DateField, Password, User, UserRole};
use crate::wire::{AddressWire, EntitySchema, PasswordWire, UserRoleWire, UserWire, schema};

impl WireMapped for User {
    type Wire = UserWire;

    const SCHEMA: &'static EntitySchema = &schema::USER;

    fn from_wire(wire: UserWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            password: wire.password,
            address: wire.address,
            profile: wire.profile,
            passwords: wire.passwords,
            user_roles: wire.user_roles,
            sessions: wire.sessions,
        }
    }

    fn to_wire(&self) -> UserWire {
        UserWire {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            ..UserWire::default()
        }
    }
}

impl WireMapped for Address {
    type Wire = AddressWire;

    const SCHEMA: &'static EntitySchema = &schema::ADDRESS;

    fn from_wire(wire: AddressWire) -> Self {
        Self {
            id: wire.id,
            street: wire.street,
            number: wire.number,
            latitude: wire.latitude,
            longitude: wire.longitude,
            user_id: wire.user_id,
        }
    }

    fn to_wire(&self) -> AddressWire {
        AddressWire {
            id: self.id,
            street: self.street.clone(),
            number: self.number.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            user_id: self.user_id,
        }
    }
}

impl WireMapped for Password {
    type Wire = PasswordWire;

    const SCHEMA: &'static EntitySchema = &schema::PASSWORD;

    fn from_wire(wire: PasswordWire) -> Self {
        Self {
            id: wire.id,
            content: wire.content,
            start_at: wire.start_at.map(DateField::from_wire),
            end_at: wire.end_at.map(DateField::from_wire),
            user_id: wire.user_id,
        }
    }

    fn to_wire(&self) -> PasswordWire {
        PasswordWire {
            id: self.id,
            content: self.content.clone(),
            start_at: self.start_at.as_ref().map(DateField::to_wire),
            end_at: self.end_at.as_ref().map(DateField::to_wire),
            user_id: self.user_id,
        }
    }
}

impl WireMapped for UserRole {
    type Wire = UserRoleWire;

    const SCHEMA: &'static EntitySchema = &schema::USER_ROLE;

    fn from_wire(wire: UserRoleWire) -> Self {
        Self {
            id: wire.id,
            start_at: wire.start_at.map(DateField::from_wire),
            end_at: wire.end_at.map(DateField::from_wire),
            user_id: wire.user_id,
            role_id: wire.role_id,
            user: wire.user,
            role: wire.role,
        }
    }

    fn to_wire(&self) -> UserRoleWire {
        UserRoleWire {
            id: self.id.clone(),
            start_at: self.start_at.as_ref().map(DateField::to_wire),
            end_at: self.end_at.as_ref().map(DateField::to_wire),
            user_id: self.user_id,
            role_id: self.role_id,
            user: None,
            role: None,
        }
    }
}
