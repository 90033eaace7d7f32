use serde::{de::DeserializeOwned, Serialize};

use super::paths::ResourcePaths;
use crate::shared::display::DisplayField;
use crate::shared::metadata::{DetailPanel, FieldErrors, FieldMetadata};

/// A foreign key that the backend expands into a nested object on read,
/// e.g. `traineeId` -> `trainee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Flat key on the owning entity.
    pub fk: &'static str,
    /// Controller name of the referenced entity.
    pub entity: &'static str,
    /// Key the nested object is written under.
    pub embed_as: &'static str,
}

impl Reference {
    pub const fn new(fk: &'static str, entity: &'static str, embed_as: &'static str) -> Self {
        Self {
            fk,
            entity,
            embed_as,
        }
    }
}

/// Trait for every entity managed through the console
///
/// Carries both the REST naming of the entity and the descriptors the
/// generic list/form/detail pages are built from.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Controller segment and singular action suffix ("Batch")
    const NAME: &'static str;

    /// Plural action suffix ("Batches")
    const PLURAL: &'static str;

    /// JSON key of the primary key ("batchId")
    const ID_FIELD: &'static str;

    /// Frontend route segment ("batches")
    const ROUTE: &'static str;

    /// UI name of one record
    const ELEMENT_NAME: &'static str;

    /// UI name of the list
    const LIST_NAME: &'static str;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// `None` until the backend has assigned an id.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    // ============================================================================
    // Descriptors
    // ============================================================================

    fn form_fields() -> &'static [FieldMetadata];

    fn list_columns() -> &'static [DisplayField];

    fn detail_fields() -> &'static [DisplayField];

    fn detail_panels() -> &'static [DetailPanel] {
        &[]
    }

    fn references() -> &'static [Reference] {
        &[]
    }

    // ============================================================================
    // Behaviour with default implementations
    // ============================================================================

    /// Refresh computed fields from their inputs. Must be idempotent.
    fn recompute_derived(&mut self) {}

    /// Rules spanning several fields; single-field rules live in the
    /// field descriptors.
    fn validate(&self, _errors: &mut FieldErrors) {}

    fn paths() -> ResourcePaths {
        ResourcePaths::new(Self::NAME, Self::PLURAL)
    }
}

/// Type-erased view of a [`Resource`] for registries.
#[derive(Debug, Clone, Copy)]
pub struct ResourceInfo {
    pub name: &'static str,
    pub plural: &'static str,
    pub id_field: &'static str,
    pub route: &'static str,
    pub list_name: &'static str,
    pub references: fn() -> &'static [Reference],
}

impl ResourceInfo {
    pub const fn of<T: Resource>() -> Self {
        Self {
            name: T::NAME,
            plural: T::PLURAL,
            id_field: T::ID_FIELD,
            route: T::ROUTE,
            list_name: T::LIST_NAME,
            references: T::references,
        }
    }

    pub fn paths(&self) -> ResourcePaths {
        ResourcePaths::new(self.name, self.plural)
    }
}

/// Positive id or `None`.
pub fn assigned(id: i64) -> Option<i64> {
    (id > 0).then_some(id)
}
