//! The part of a Prisma DMMF document input type resolution reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::candidate::TypeCandidate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DmmfDocument {
    #[serde(default)]
    pub schema: DmmfSchema,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DmmfSchema {
    /// Input objects keyed by namespace (`prisma`, `model`).
    #[serde(default)]
    pub input_object_types: BTreeMap<String, Vec<DmmfInputType>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DmmfInputType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<DmmfInputField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DmmfInputField {
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_nullable: bool,
    pub input_types: Vec<TypeCandidate>,
}

impl DmmfDocument {
    pub fn from_json(input: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn input_types(&self) -> impl Iterator<Item = &DmmfInputType> {
        self.schema.input_object_types.values().flatten()
    }
}
