//! Character record and partial updates
//!
//! On disk the record uses the Spanish field names of legacy catalog files
//! (`nombre`, `faccion`, `rol`, `arma`, `estado`). The English names are
//! accepted as aliases when reading.

use serde::{Deserialize, Serialize};

/// Status values that count as "active" (compared ignoring ASCII case).
const ACTIVE_STATUSES: [&str; 3] = ["Active", "Activo", "Vivo"];

/// A single catalog entry. The key lives in the owning [`Collection`](crate::Collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Character {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "faccion", alias = "faction")]
    pub faction: String,
    #[serde(rename = "rol", alias = "role")]
    pub role: String,
    #[serde(rename = "arma", alias = "weapon")]
    pub weapon: String,
    #[serde(rename = "estado", alias = "status")]
    pub status: String,
}

impl Character {
    /// Status given to new characters when none is chosen.
    pub const DEFAULT_STATUS: &'static str = "Active";

    /// Status written by a soft delete.
    pub const INACTIVE_STATUS: &'static str = "Inactive";

    pub fn new(
        name: impl Into<String>,
        faction: impl Into<String>,
        role: impl Into<String>,
        weapon: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            role: role.into(),
            weapon: weapon.into(),
            status: status.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        ACTIVE_STATUSES
            .iter()
            .any(|s| s.eq_ignore_ascii_case(self.status.trim()))
    }
}

/// Field-by-field update of a [`Character`].
///
/// `None` leaves a field untouched. An empty string is treated the same way:
/// a patch can replace a value but never blank it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub faction: Option<String>,
    pub role: Option<String>,
    pub weapon: Option<String>,
    pub status: Option<String>,
}

impl CharacterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn weapon(mut self, weapon: impl Into<String>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The faction this patch would write, if any.
    pub fn new_faction(&self) -> Option<&str> {
        supplied(&self.faction)
    }

    /// True when applying the patch cannot change any field.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.faction, &self.role, &self.weapon, &self.status]
            .into_iter()
            .all(|f| supplied(f).is_none())
    }

    /// Apply every supplied, non-empty field to `character`.
    ///
    /// Validation (faction membership) is the caller's job and must happen
    /// before this is called.
    pub fn apply_to(&self, character: &mut Character) {
        let targets = [
            (&self.name, &mut character.name),
            (&self.faction, &mut character.faction),
            (&self.role, &mut character.role),
            (&self.weapon, &mut character.weapon),
            (&self.status, &mut character.status),
        ];
        for (update, field) in targets {
            if let Some(value) = supplied(update) {
                *field = value.to_string();
            }
        }
    }
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
