use eyre::Context;
use serde::Serialize;

use crate::candidate::TypeCandidate;
use crate::dmmf::{DmmfDocument, DmmfInputType};
use crate::resolver::select_input_type;
use crate::settings::ResolveSettings;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub name: String,
    pub input_type: TypeCandidate,
    pub is_required: bool,
    pub is_nullable: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedObject {
    pub name: String,
    pub fields: Vec<ResolvedField>,
}

pub fn resolve_input_type(
    input_type: &DmmfInputType,
    settings: &ResolveSettings,
) -> eyre::Result<ResolvedObject> {
    let fields = input_type
        .fields
        .iter()
        .map(|field| {
            let hint = settings.hint_for(&input_type.name, &field.name);
            let selected = select_input_type(&field.input_types, hint).wrap_err_with(|| {
                format!(
                    "failed to resolve input type for {}.{}",
                    input_type.name, field.name
                )
            })?;

            tracing::debug!(
                object = input_type.name.as_str(),
                field = field.name.as_str(),
                hint = hint,
                selected = selected.type_name.as_str(),
                is_list = selected.is_list,
                "resolved input type"
            );

            Ok(ResolvedField {
                name: field.name.clone(),
                input_type: selected,
                is_required: field.is_required,
                is_nullable: field.is_nullable,
            })
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(ResolvedObject {
        name: input_type.name.clone(),
        fields,
    })
}

pub fn resolve_document(
    document: &DmmfDocument,
    settings: &ResolveSettings,
) -> eyre::Result<Vec<ResolvedObject>> {
    let objects = document
        .input_types()
        .map(|input_type| resolve_input_type(input_type, settings))
        .collect::<eyre::Result<Vec<_>>>()?;

    tracing::info!(
        objects = objects.len(),
        fields = objects.iter().map(|o| o.fields.len()).sum::<usize>(),
        "resolved input types"
    );

    Ok(objects)
}
