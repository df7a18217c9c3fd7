use crate::{MAX_FIELD_KEY_LEN, prelude::*};

///
/// FieldList
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldList {
    pub fields: &'static [Field],
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }
}

impl ValidateNode for FieldList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.key == field.key) {
                err!(errs, "duplicate field key '{}'", field.key);
            }
        }

        errs.result()
    }
}

///
/// Field
///
/// One column of an entity, driving generic form and table generation.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.key.is_empty() {
            err!(errs, "field key is empty");
        }
        if self.key.len() > MAX_FIELD_KEY_LEN {
            err!(
                errs,
                "field key '{}' exceeds max length {MAX_FIELD_KEY_LEN}",
                self.key
            );
        }
        if !self.key.is_ascii() {
            err!(errs, "field key '{}' must be ASCII", self.key);
        }
        if self.label.is_empty() {
            err!(errs, "field '{}' label is empty", self.key);
        }

        errs.result()
    }
}

///
/// TESTS
///
