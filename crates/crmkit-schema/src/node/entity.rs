use crate::{MAX_LABEL_LEN, prelude::*};

///
/// Entity
///
/// Configuration-time descriptor for one kind of managed record. Field
/// order is display order for generic forms and the profile overview.
///

#[derive(Clone, Debug, Serialize)]
pub struct Entity {
    pub key: EntityKey,
    pub label: &'static str,
    pub label_plural: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub fields: FieldList,
}

impl Entity {
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// The identifier field, skipped by the profile overview.
    #[must_use]
    pub fn id_field(&self) -> Option<&Field> {
        self.fields.get(ID_FIELD)
    }

    /// The field pipeline stages match against, if declared.
    #[must_use]
    pub fn status_field(&self) -> Option<&Field> {
        self.fields.get(STATUS_FIELD)
    }
}

impl ValidateNode for Entity {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (name, label) in [("label", self.label), ("label_plural", self.label_plural)] {
            if label.is_empty() {
                err!(errs, "{name} is empty");
            }
            if label.len() > MAX_LABEL_LEN {
                err!(errs, "{name} '{label}' exceeds max length {MAX_LABEL_LEN}");
            }
        }

        if self.id_field().is_none() {
            err!(errs, "entity '{}' has no '{ID_FIELD}' field", self.key);
        }

        for field in self.fields.iter() {
            if let Err(tree) = field.validate() {
                errs.merge_at(field.key, tree);
            }
        }
        if let Err(tree) = self.fields.validate() {
            errs.merge_at("fields", tree);
        }

        errs.result()
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
            fields: &[
                Field {
                    key: "id",
                    label: "ID",
                    ty: FieldType::Text,
                    required: true,
                },
                Field {
                    key: "name",
                    label: "Name",
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

    #[test]
    fn id_and_status_fields_resolve() {
        assert!(CONTACT.id_field().is_some());
        assert!(CONTACT.status_field().is_some());
        assert!(CONTACT.field("missing").is_none());
        assert!(CONTACT.validate().is_ok());
    }

    #[test]
    fn entity_without_id_field_fails() {
        const NO_ID: Entity = Entity {
            key: EntityKey::Store,
            label: "Store",
            label_plural: "Stores",
            icon: "store",
            color: "#16a34a",
            fields: FieldList {
                fields: &[Field {
                    key: "name",
                    label: "Name",
                    ty: FieldType::Text,
                    required: true,
                }],
            },
        };

        assert!(NO_ID.validate().is_err());
    }
}
