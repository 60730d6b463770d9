use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespace a DMMF type reference points into.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum TypeLocation {
    Scalar,
    EnumTypes,
    InputObjectTypes,
    FieldRefTypes,
    OutputObjectTypes,
}

impl TypeLocation {
    pub fn is_scalar_or_enum(&self) -> bool {
        matches!(self, TypeLocation::Scalar | TypeLocation::EnumTypes)
    }
}

/// One possible binding for an input field, as listed in `inputTypes`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TypeCandidate {
    #[serde(rename = "type")]
    pub type_name: String,
    pub location: TypeLocation,
    #[serde(default)]
    pub is_list: bool,
}

impl TypeCandidate {
    pub fn new(type_name: impl Into<String>, location: TypeLocation, is_list: bool) -> Self {
        Self {
            type_name: type_name.into(),
            location,
            is_list,
        }
    }

    pub fn scalar(type_name: impl Into<String>) -> Self {
        Self::new(type_name, TypeLocation::Scalar, false)
    }

    pub fn enumeration(type_name: impl Into<String>) -> Self {
        Self::new(type_name, TypeLocation::EnumTypes, false)
    }

    pub fn input_object(type_name: impl Into<String>) -> Self {
        Self::new(type_name, TypeLocation::InputObjectTypes, false)
    }

    pub fn field_ref(type_name: impl Into<String>) -> Self {
        Self::new(type_name, TypeLocation::FieldRefTypes, false)
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// The `null` sentinel DMMF adds to nullable fields.
    pub fn is_null(&self) -> bool {
        matches!(self.type_name.as_str(), "null" | "Null")
    }
}

impl fmt::Display for TypeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list {
            write!(f, "[{}]", self.type_name)
        } else {
            f.write_str(&self.type_name)
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{TypeCandidate, TypeLocation};

    #[test]
    fn deserializes_dmmf_type_reference() {
        let input = json!({
            "type": "StringNullableFilter",
            "namespace": "prisma",
            "location": "inputObjectTypes",
            "isList": false
        });

        let output: TypeCandidate = serde_json::from_value(input).unwrap();

        assert_eq!(output, TypeCandidate::input_object("StringNullableFilter"));
    }

    #[test]
    fn deserializes_field_ref_list() {
        let input = json!({
            "type": "ListStringFieldRefInput",
            "location": "fieldRefTypes",
            "isList": true
        });

        let output: TypeCandidate = serde_json::from_value(input).unwrap();

        assert_eq!(output.location, TypeLocation::FieldRefTypes);
        assert_eq!(output.is_list, true);
    }

    #[test]
    fn null_sentinel_matches_both_spellings_only() {
        assert_eq!(TypeCandidate::scalar("null").is_null(), true);
        assert_eq!(TypeCandidate::scalar("Null").is_null(), true);
        assert_eq!(TypeCandidate::scalar("NULL").is_null(), false);
        assert_eq!(TypeCandidate::scalar("NullableString").is_null(), false);
    }

    #[test]
    fn displays_list_form_in_brackets() {
        assert_eq!(TypeCandidate::scalar("String").list().to_string(), "[String]");
        assert_eq!(TypeCandidate::enumeration("Role").to_string(), "Role");
    }
}
