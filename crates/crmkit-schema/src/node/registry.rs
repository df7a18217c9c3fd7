use crate::{node::NodeError, prelude::*};
use std::collections::{BTreeMap, BTreeSet};

///
/// Registry
///
/// The single config-as-data container: entity schemas, pipelines,
/// category presets, tenant definitions, and the two routing allow-lists.
/// Populated once at process start, read-only afterwards.
///

#[derive(Debug, Default, Serialize)]
pub struct Registry {
    entities: BTreeMap<EntityKey, &'static Entity>,
    pipelines: BTreeMap<EntityKey, &'static Pipeline>,
    presets: BTreeMap<Category, &'static Preset>,
    tenants: BTreeMap<&'static str, &'static Tenant>,
    legacy: BTreeSet<&'static str>,
    partner: BTreeSet<&'static str>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //
    // registration
    //

    pub fn insert_entity(&mut self, entity: &'static Entity) -> Result<(), NodeError> {
        if self.entities.insert(entity.key, entity).is_some() {
            return Err(NodeError::DuplicateEntity(entity.key));
        }

        Ok(())
    }

    pub fn insert_pipeline(&mut self, pipeline: &'static Pipeline) -> Result<(), NodeError> {
        if self.pipelines.insert(pipeline.entity, pipeline).is_some() {
            return Err(NodeError::DuplicatePipeline(pipeline.entity));
        }

        Ok(())
    }

    pub fn insert_preset(&mut self, preset: &'static Preset) -> Result<(), NodeError> {
        if self.presets.insert(preset.category, preset).is_some() {
            return Err(NodeError::DuplicatePreset(preset.category));
        }

        Ok(())
    }

    pub fn insert_tenant(&mut self, tenant: &'static Tenant) -> Result<(), NodeError> {
        if self.tenants.insert(tenant.slug, tenant).is_some() {
            return Err(NodeError::DuplicateTenant(tenant.slug.to_string()));
        }

        Ok(())
    }

    pub fn push_legacy(&mut self, slug: &'static str) -> Result<(), NodeError> {
        if !self.legacy.insert(slug) {
            return Err(NodeError::DuplicateRoutingSlug(slug.to_string(), "legacy"));
        }

        Ok(())
    }

    pub fn push_partner(&mut self, slug: &'static str) -> Result<(), NodeError> {
        if !self.partner.insert(slug) {
            return Err(NodeError::DuplicateRoutingSlug(slug.to_string(), "partner"));
        }

        Ok(())
    }

    //
    // lookups
    //

    #[must_use]
    pub fn entity(&self, key: EntityKey) -> Option<&'static Entity> {
        self.entities.get(&key).copied()
    }

    #[must_use]
    pub fn pipeline(&self, key: EntityKey) -> Option<&'static Pipeline> {
        self.pipelines.get(&key).copied()
    }

    #[must_use]
    pub fn preset(&self, category: Category) -> Option<&'static Preset> {
        self.presets.get(&category).copied()
    }

    /// The unmapped-slug fallback preset.
    #[must_use]
    pub fn general_preset(&self) -> Option<&'static Preset> {
        self.preset(Category::General)
    }

    #[must_use]
    pub fn tenant(&self, slug: &str) -> Option<&'static Tenant> {
        self.tenants.get(slug).copied()
    }

    #[must_use]
    pub fn is_legacy(&self, slug: &str) -> bool {
        self.legacy.contains(slug)
    }

    #[must_use]
    pub fn is_partner(&self, slug: &str) -> bool {
        self.partner.contains(slug)
    }

    //
    // iteration (validation passes)
    //

    pub fn entities(&self) -> impl Iterator<Item = &'static Entity> + '_ {
        self.entities.values().copied()
    }

    pub fn pipelines(&self) -> impl Iterator<Item = &'static Pipeline> + '_ {
        self.pipelines.values().copied()
    }

    pub fn presets(&self) -> impl Iterator<Item = &'static Preset> + '_ {
        self.presets.values().copied()
    }

    pub fn tenants(&self) -> impl Iterator<Item = &'static Tenant> + '_ {
        self.tenants.values().copied()
    }

    pub fn legacy_slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.legacy.iter().copied()
    }

    pub fn partner_slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.partner.iter().copied()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT: Entity = Entity {
        key: EntityKey::Contact,
        label: "Contact",
        label_plural: "Contacts",
        icon: "user",
        color: "#2563eb",
        fields: FieldList {
            fields: &[Field {
                key: "id",
                label: "ID",
                ty: FieldType::Text,
                required: true,
            }],
        },
    };

    #[test]
    fn duplicate_entity_registration_fails() {
        let mut reg = Registry::new();
        reg.insert_entity(&CONTACT).expect("first insert");

        assert!(matches!(
            reg.insert_entity(&CONTACT),
            Err(NodeError::DuplicateEntity(EntityKey::Contact))
        ));
    }

    #[test]
    fn routing_lists_reject_duplicates() {
        let mut reg = Registry::new();
        reg.push_legacy("gasmask").expect("first insert");

        assert!(reg.is_legacy("gasmask"));
        assert!(!reg.is_partner("gasmask"));
        assert!(reg.push_legacy("gasmask").is_err());
    }

    #[test]
    fn lookups_miss_cleanly() {
        let reg = Registry::new();

        assert!(reg.entity(EntityKey::Loan).is_none());
        assert!(reg.tenant("acme-wholesale").is_none());
        assert!(reg.general_preset().is_none());
    }

    #[test]
    fn registry_serializes_for_introspection() {
        let mut reg = Registry::new();
        reg.insert_entity(&CONTACT).expect("insert");

        let json = serde_json::to_value(&reg).expect("serialize");
        assert!(json["entities"]["Contact"]["fields"].is_object());
    }
}
