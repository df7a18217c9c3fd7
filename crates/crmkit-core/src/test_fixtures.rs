//! Shared config fixtures for core tests. Each test builds a fresh local
//! registry; the global registry is never touched from unit tests.

use crmkit_schema::{prelude::*, validate::validate_registry};

static CONTACT: Entity = Entity {
    key: EntityKey::Contact,
    label: "Contact",
    label_plural: "Contacts",
    icon: "user",
    color: "#2563eb",
    fields: FieldList {
        fields: &[
            Field {
                key: "id",
                label: "ID",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "name",
                label: "Full Name",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "email",
                label: "Email",
                ty: FieldType::Text,
                required: false,
            },
            Field {
                key: "status",
                label: "Status",
                ty: FieldType::Select,
                required: false,
            },
            Field {
                key: "score",
                label: "Score",
                ty: FieldType::Number,
                required: false,
            },
        ],
    },
};

static STORE: Entity = Entity {
    key: EntityKey::Store,
    label: "Store",
    label_plural: "Stores",
    icon: "store",
    color: "#16a34a",
    fields: FieldList {
        fields: &[
            Field {
                key: "id",
                label: "ID",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "name",
                label: "Store Name",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "city",
                label: "City",
                ty: FieldType::Text,
                required: false,
            },
        ],
    },
};

static WHOLESALER: Entity = Entity {
    key: EntityKey::Wholesaler,
    label: "Wholesaler",
    label_plural: "Wholesalers",
    icon: "truck",
    color: "#9333ea",
    fields: FieldList {
        fields: &[
            Field {
                key: "id",
                label: "ID",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "name",
                label: "Company",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "status",
                label: "Status",
                ty: FieldType::Select,
                required: false,
            },
        ],
    },
};

static CONTACT_PIPELINE: Pipeline = Pipeline {
    entity: EntityKey::Contact,
    stages: &[
        Stage {
            value: "new",
            label: "New",
            color: "#64748b",
        },
        Stage {
            value: "qualified",
            label: "Qualified",
            color: "#f59e0b",
        },
        Stage {
            value: "won",
            label: "Won",
            color: "#16a34a",
        },
    ],
};

static WHOLESALER_PIPELINE: Pipeline = Pipeline {
    entity: EntityKey::Wholesaler,
    stages: &[
        Stage {
            value: "lead",
            label: "Lead",
            color: "#64748b",
        },
        Stage {
            value: "active",
            label: "Active",
            color: "#16a34a",
        },
    ],
};

static GENERAL: Preset = Preset {
    category: Category::General,
    entities: &[EntityKey::Contact, EntityKey::Store],
    features: Features {
        pipeline: true,
        media_vault: false,
        whatsapp: false,
        campaigns: false,
        kpi_tiles: true,
    },
    kpis: &[KpiTile {
        entity: EntityKey::Contact,
        label: "Contacts",
        icon: "user",
        color: "#2563eb",
    }],
};

static WHOLESALE: Preset = Preset {
    category: Category::Wholesale,
    entities: &[EntityKey::Wholesaler, EntityKey::Store],
    features: Features {
        pipeline: true,
        media_vault: false,
        whatsapp: false,
        campaigns: false,
        kpi_tiles: true,
    },
    kpis: &[KpiTile {
        entity: EntityKey::Wholesaler,
        label: "Wholesalers",
        icon: "truck",
        color: "#9333ea",
    }],
};

static GASMASK: Tenant = Tenant {
    slug: "gasmask",
    label: "Gas Mask",
    category: None,
    entities: &[EntityKey::Contact, EntityKey::Store],
    features: Features {
        pipeline: true,
        media_vault: true,
        whatsapp: false,
        campaigns: false,
        kpi_tiles: true,
    },
    kpis: &[KpiTile {
        entity: EntityKey::Contact,
        label: "Contacts",
        icon: "user",
        color: "#2563eb",
    }],
};

static VERDANT_COFFEE: Tenant = Tenant {
    slug: "verdant-coffee",
    label: "Verdant Coffee",
    category: Some(Category::Wholesale),
    entities: &[],
    features: Features {
        pipeline: true,
        media_vault: false,
        whatsapp: true,
        campaigns: false,
        kpi_tiles: true,
    },
    kpis: &[],
};

pub(crate) fn fixture_registry() -> Registry {
    let mut reg = Registry::new();

    reg.insert_entity(&CONTACT).expect("contact");
    reg.insert_entity(&STORE).expect("store");
    reg.insert_entity(&WHOLESALER).expect("wholesaler");

    reg.insert_pipeline(&CONTACT_PIPELINE).expect("contact pipeline");
    reg.insert_pipeline(&WHOLESALER_PIPELINE)
        .expect("wholesaler pipeline");

    reg.insert_preset(&GENERAL).expect("general preset");
    reg.insert_preset(&WHOLESALE).expect("wholesale preset");

    reg.insert_tenant(&GASMASK).expect("gasmask");
    reg.insert_tenant(&VERDANT_COFFEE).expect("verdant-coffee");

    reg.push_legacy("gasmask").expect("legacy list");
    reg.push_partner("toptier").expect("partner list");

    validate_registry(&reg).expect("fixture registry must validate");

    reg
}
