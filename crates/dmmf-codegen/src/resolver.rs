use std::collections::HashMap;

use itertools::Itertools;

use crate::candidate::{TypeCandidate, TypeLocation};
use crate::errors::ResolveError;
use crate::hint::Hint;
use crate::matcher::GlobMatcher;

/// Picks the input type a generated field should be annotated with.
///
/// `candidates` is the `inputTypes` list DMMF reports for the field and
/// `hint` is an optional `match:<glob>` / substring override. Rules are
/// tried in order, the first one that yields a candidate wins:
///
/// 1. drop `null` / `Null` sentinels and exact duplicates
/// 2. a single remaining candidate
/// 3. the first list form, when every candidate shares one location
/// 4. the first candidate matching the hint, glob then substring
/// 5. the first input object type
/// 6. the `Json` scalar, when competing with enums
/// 7. a scalar or enum (list form first), when exactly one field reference
///    type competes with them
pub fn select_input_type(
    candidates: &[TypeCandidate],
    hint: Option<&str>,
) -> Result<TypeCandidate, ResolveError> {
    let candidates = candidates
        .iter()
        .filter(|c| !c.is_null())
        .unique()
        .collect_vec();

    if let [only] = candidates.as_slice() {
        return Ok((*only).clone());
    }

    let counts = candidates.iter().map(|c| c.location).counts();
    let count = |location: TypeLocation| counts.get(&location).copied().unwrap_or(0);

    if counts.len() == 1 {
        if let Some(list) = candidates.iter().find(|c| c.is_list) {
            return Ok((*list).clone());
        }
    }

    if let Some(found) = hint
        .and_then(Hint::parse)
        .and_then(|hint| find_by_hint(&candidates, hint))
    {
        return Ok(found.clone());
    }

    if let Some(object) = candidates
        .iter()
        .find(|c| c.location == TypeLocation::InputObjectTypes)
    {
        return Ok((*object).clone());
    }

    if count(TypeLocation::EnumTypes) > 0 && count(TypeLocation::Scalar) > 0 {
        if let Some(json) = candidates
            .iter()
            .find(|c| c.type_name == "Json" && c.location == TypeLocation::Scalar)
        {
            return Ok((*json).clone());
        }
    }

    if let Some(found) = collapse_field_ref(&candidates, &counts) {
        return Ok(found.clone());
    }

    Err(ResolveError::Disambiguation {
        candidates: candidates.iter().map(|c| c.type_name.clone()).collect(),
    })
}

fn find_by_hint<'c>(
    candidates: &[&'c TypeCandidate],
    hint: Hint<'_>,
) -> Option<&'c TypeCandidate> {
    if let Hint::Glob { pattern, .. } = hint {
        // an uncompilable pattern matches nothing
        let found = GlobMatcher::new(pattern).ok().and_then(|matcher| {
            candidates
                .iter()
                .find(|c| matcher.is_match(&c.type_name))
                .copied()
        });

        if found.is_some() {
            return found;
        }
    }

    let needle = hint.raw();
    candidates
        .iter()
        .find(|c| c.type_name.contains(needle))
        .copied()
}

fn collapse_field_ref<'c>(
    candidates: &[&'c TypeCandidate],
    counts: &HashMap<TypeLocation, usize>,
) -> Option<&'c TypeCandidate> {
    let count = |location: TypeLocation| counts.get(&location).copied().unwrap_or(0);
    let has_scalar_or_enum =
        count(TypeLocation::Scalar) > 0 || count(TypeLocation::EnumTypes) > 0;

    if !has_scalar_or_enum || count(TypeLocation::FieldRefTypes) != 1 {
        return None;
    }

    let mut scalar_or_enum = candidates.iter().filter(|c| c.location.is_scalar_or_enum());

    scalar_or_enum
        .clone()
        .find(|c| c.is_list)
        .or_else(|| scalar_or_enum.next())
        .copied()
}
