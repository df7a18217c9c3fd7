//! Built-in configuration catalog: the full entity vocabulary, the category
//! presets, the bespoke tenant definitions, and the routing allow-lists.
//! Everything here is static data; `install` registers it once per process.

use crate::error::Error;
use crmkit_schema::{build::registry_write, prelude::*};
use std::sync::OnceLock;

//
// entities
//

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
                key: "phone",
                label: "Phone",
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
                key: "last_contacted",
                label: "Last Contacted",
                ty: FieldType::Date,
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
            Field {
                key: "address",
                label: "Address",
                ty: FieldType::Text,
                required: false,
            },
            Field {
                key: "active",
                label: "Active",
                ty: FieldType::Bool,
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
                key: "region",
                label: "Region",
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
                key: "credit_limit",
                label: "Credit Limit",
                ty: FieldType::Number,
                required: false,
            },
        ],
    },
};

static EMPLOYEE: Entity = Entity {
    key: EntityKey::Employee,
    label: "Employee",
    label_plural: "Employees",
    icon: "badge",
    color: "#0891b2",
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
                key: "role",
                label: "Role",
                ty: FieldType::Text,
                required: false,
            },
            Field {
                key: "hired_on",
                label: "Hired On",
                ty: FieldType::Date,
                required: false,
            },
        ],
    },
};

static CAMPAIGN: Entity = Entity {
    key: EntityKey::Campaign,
    label: "Campaign",
    label_plural: "Campaigns",
    icon: "megaphone",
    color: "#ea580c",
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
                label: "Campaign Name",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "channel",
                label: "Channel",
                ty: FieldType::Select,
                required: false,
            },
            Field {
                key: "status",
                label: "Status",
                ty: FieldType::Select,
                required: false,
            },
            Field {
                key: "budget",
                label: "Budget",
                ty: FieldType::Number,
                required: false,
            },
        ],
    },
};

static ROUTE: Entity = Entity {
    key: EntityKey::Route,
    label: "Route",
    label_plural: "Routes",
    icon: "map",
    color: "#4f46e5",
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
                label: "Route Name",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "day",
                label: "Day",
                ty: FieldType::Select,
                required: false,
            },
            Field {
                key: "stops",
                label: "Stops",
                ty: FieldType::Number,
                required: false,
            },
        ],
    },
};

static LOAN: Entity = Entity {
    key: EntityKey::Loan,
    label: "Loan",
    label_plural: "Loans",
    icon: "bank",
    color: "#dc2626",
    fields: FieldList {
        fields: &[
            Field {
                key: "id",
                label: "ID",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "borrower",
                label: "Borrower",
                ty: FieldType::Text,
                required: true,
            },
            Field {
                key: "principal",
                label: "Principal",
                ty: FieldType::Number,
                required: true,
            },
            Field {
                key: "status",
                label: "Status",
                ty: FieldType::Select,
                required: false,
            },
            Field {
                key: "due_date",
                label: "Due Date",
                ty: FieldType::Date,
                required: false,
            },
        ],
    },
};

//
// pipelines
//

static CONTACT_PIPELINE: Pipeline = Pipeline {
    entity: EntityKey::Contact,
    stages: &[
        Stage {
            value: "new",
            label: "New",
            color: "#64748b",
        },
        Stage {
            value: "contacted",
            label: "Contacted",
            color: "#0891b2",
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
        Stage {
            value: "lost",
            label: "Lost",
            color: "#dc2626",
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
            value: "negotiating",
            label: "Negotiating",
            color: "#f59e0b",
        },
        Stage {
            value: "active",
            label: "Active",
            color: "#16a34a",
        },
        Stage {
            value: "dormant",
            label: "Dormant",
            color: "#94a3b8",
        },
    ],
};

static CAMPAIGN_PIPELINE: Pipeline = Pipeline {
    entity: EntityKey::Campaign,
    stages: &[
        Stage {
            value: "draft",
            label: "Draft",
            color: "#64748b",
        },
        Stage {
            value: "scheduled",
            label: "Scheduled",
            color: "#0891b2",
        },
        Stage {
            value: "live",
            label: "Live",
            color: "#16a34a",
        },
        Stage {
            value: "done",
            label: "Done",
            color: "#94a3b8",
        },
    ],
};

static LOAN_PIPELINE: Pipeline = Pipeline {
    entity: EntityKey::Loan,
    stages: &[
        Stage {
            value: "requested",
            label: "Requested",
            color: "#64748b",
        },
        Stage {
            value: "approved",
            label: "Approved",
            color: "#0891b2",
        },
        Stage {
            value: "repaying",
            label: "Repaying",
            color: "#f59e0b",
        },
        Stage {
            value: "closed",
            label: "Closed",
            color: "#16a34a",
        },
    ],
};

//
// presets
//

static GENERAL: Preset = Preset {
    category: Category::General,
    entities: &[EntityKey::Contact, EntityKey::Store, EntityKey::Campaign],
    features: Features {
        pipeline: true,
        media_vault: false,
        whatsapp: false,
        campaigns: true,
        kpi_tiles: true,
    },
    kpis: &[
        KpiTile {
            entity: EntityKey::Contact,
            label: "Contacts",
            icon: "user",
            color: "#2563eb",
        },
        KpiTile {
            entity: EntityKey::Store,
            label: "Stores",
            icon: "store",
            color: "#16a34a",
        },
        KpiTile {
            entity: EntityKey::Campaign,
            label: "Campaigns",
            icon: "megaphone",
            color: "#ea580c",
        },
    ],
};

static RETAIL: Preset = Preset {
    category: Category::Retail,
    entities: &[EntityKey::Store, EntityKey::Contact, EntityKey::Campaign],
    features: Features {
        pipeline: true,
        media_vault: true,
        whatsapp: false,
        campaigns: true,
        kpi_tiles: true,
    },
    kpis: &[
        KpiTile {
            entity: EntityKey::Store,
            label: "Stores",
            icon: "store",
            color: "#16a34a",
        },
        KpiTile {
            entity: EntityKey::Contact,
            label: "Contacts",
            icon: "user",
            color: "#2563eb",
        },
    ],
};

static SERVICES: Preset = Preset {
    category: Category::Services,
    entities: &[EntityKey::Contact, EntityKey::Employee],
    features: Features {
        pipeline: true,
        media_vault: false,
        whatsapp: true,
        campaigns: false,
        kpi_tiles: true,
    },
    kpis: &[KpiTile {
        entity: EntityKey::Contact,
        label: "Clients",
        icon: "user",
        color: "#2563eb",
    }],
};

static WHOLESALE: Preset = Preset {
    category: Category::Wholesale,
    entities: &[EntityKey::Wholesaler, EntityKey::Store, EntityKey::Route],
    features: Features {
        pipeline: true,
        media_vault: false,
        whatsapp: true,
        campaigns: false,
        kpi_tiles: true,
    },
    kpis: &[
        KpiTile {
            entity: EntityKey::Wholesaler,
            label: "Wholesalers",
            icon: "truck",
            color: "#9333ea",
        },
        KpiTile {
            entity: EntityKey::Route,
            label: "Routes",
            icon: "map",
            color: "#4f46e5",
        },
    ],
};

//
// tenants
//

static GASMASK: Tenant = Tenant {
    slug: "gasmask",
    label: "Gas Mask",
    category: None,
    entities: &[EntityKey::Contact, EntityKey::Store, EntityKey::Campaign],
    features: Features {
        pipeline: true,
        media_vault: true,
        whatsapp: false,
        campaigns: true,
        kpi_tiles: true,
    },
    kpis: &[
        KpiTile {
            entity: EntityKey::Contact,
            label: "Contacts",
            icon: "user",
            color: "#2563eb",
        },
        KpiTile {
            entity: EntityKey::Campaign,
            label: "Campaigns",
            icon: "megaphone",
            color: "#ea580c",
        },
    ],
};

static TOPTIER: Tenant = Tenant {
    slug: "toptier",
    label: "Top Tier",
    category: None,
    entities: &[EntityKey::Loan, EntityKey::Contact],
    features: Features::ALL,
    kpis: &[KpiTile {
        entity: EntityKey::Loan,
        label: "Loans",
        icon: "bank",
        color: "#dc2626",
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

static BLUEBIRD_SALON: Tenant = Tenant {
    slug: "bluebird-salon",
    label: "Bluebird Salon",
    category: Some(Category::Services),
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

//
// routing lists
//

static LEGACY_SLUGS: &[&str] = &["gasmask", "gasmask-events"];
static PARTNER_SLUGS: &[&str] = &["toptier", "toptier-capital"];

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Register the built-in catalog into the global registry. Safe to call
/// more than once; only the first call installs.
pub fn install() -> Result<(), Error> {
    // Flag checked under the write lock so concurrent callers serialize.
    let mut reg = registry_write();
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    for entity in [
        &CONTACT,
        &STORE,
        &WHOLESALER,
        &EMPLOYEE,
        &CAMPAIGN,
        &ROUTE,
        &LOAN,
    ] {
        reg.insert_entity(entity).map_err(crmkit_schema::Error::from)?;
    }

    for pipeline in [
        &CONTACT_PIPELINE,
        &WHOLESALER_PIPELINE,
        &CAMPAIGN_PIPELINE,
        &LOAN_PIPELINE,
    ] {
        reg.insert_pipeline(pipeline)
            .map_err(crmkit_schema::Error::from)?;
    }

    for preset in [&GENERAL, &RETAIL, &SERVICES, &WHOLESALE] {
        reg.insert_preset(preset).map_err(crmkit_schema::Error::from)?;
    }

    for tenant in [&GASMASK, &TOPTIER, &VERDANT_COFFEE, &BLUEBIRD_SALON] {
        reg.insert_tenant(tenant).map_err(crmkit_schema::Error::from)?;
    }

    for slug in LEGACY_SLUGS.iter().copied() {
        reg.push_legacy(slug).map_err(crmkit_schema::Error::from)?;
    }
    for slug in PARTNER_SLUGS.iter().copied() {
        reg.push_partner(slug).map_err(crmkit_schema::Error::from)?;
    }

    INSTALLED.set(()).ok();

    Ok(())
}
