use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const USE_INPUT_TYPE_PREFIX: &str = "useInputType_";
const ALL_PROPERTIES: &str = "ALL";

/// Hints for the fields of input objects whose name contains `type_name`.
///
/// `properties` maps a field name, or `ALL`, to a hint string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UseInputType {
    pub type_name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl UseInputType {
    pub fn hint_for(&self, field_name: &str) -> Option<&str> {
        self.properties
            .get(field_name)
            .or_else(|| self.properties.get(ALL_PROPERTIES))
            .map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResolveSettings {
    #[serde(default)]
    pub use_input_type: Vec<UseInputType>,
}

impl ResolveSettings {
    /// Builds settings from generator options such as
    /// `useInputType_WhereInput_ALL = "match:*WhereInput"`.
    ///
    /// Keys without the `useInputType_` prefix are skipped.
    pub fn from_entries<'a, I>(entries: I) -> eyre::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        settings.extend_entries(entries)?;
        Ok(settings)
    }

    fn extend_entries<'a, I>(&mut self, entries: I) -> eyre::Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in entries {
            let Some(rest) = key.strip_prefix(USE_INPUT_TYPE_PREFIX) else {
                continue;
            };

            let Some((type_name, property)) = rest
                .rsplit_once('_')
                .filter(|(type_name, property)| !type_name.is_empty() && !property.is_empty())
            else {
                eyre::bail!(
                    "invalid option {key}, expected {USE_INPUT_TYPE_PREFIX}{{typeName}}_{{property}}"
                );
            };

            self.insert(type_name, property, value);
        }

        Ok(())
    }

    pub fn insert(&mut self, type_name: &str, property: &str, hint: &str) {
        match self
            .use_input_type
            .iter_mut()
            .find(|rule| rule.type_name == type_name)
        {
            Some(rule) => {
                rule.properties.insert(property.into(), hint.into());
            }
            None => self.use_input_type.push(UseInputType {
                type_name: type_name.into(),
                properties: BTreeMap::from([(property.into(), hint.into())]),
            }),
        }
    }

    /// Appends the rules of `other`, merging rules that share a type name.
    pub fn merge(&mut self, other: ResolveSettings) {
        for rule in other.use_input_type {
            for (property, hint) in &rule.properties {
                self.insert(&rule.type_name, property, hint);
            }
        }
    }

    /// Hint for `object_name.field_name` from the first rule whose type name
    /// is part of `object_name`.
    pub fn hint_for(&self, object_name: &str, field_name: &str) -> Option<&str> {
        self.use_input_type
            .iter()
            .find(|rule| object_name.contains(rule.type_name.as_str()))
            .and_then(|rule| rule.hint_for(field_name))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::ResolveSettings;

    #[test]
    fn parses_generator_options() {
        let settings = ResolveSettings::from_entries([
            ("output", "src/@generated"),
            ("useInputType_WhereInput_ALL", "WhereInput"),
            ("useInputType_CreateOne_author", "match:*CreateNestedOne*"),
        ])
        .unwrap();

        assert_eq!(settings.use_input_type.len(), 2);
        assert_eq!(settings.use_input_type[0].type_name, "WhereInput");
        assert_eq!(
            settings.use_input_type[1].properties.get("author").map(String::as_str),
            Some("match:*CreateNestedOne*")
        );
    }

    #[test]
    fn type_name_may_contain_underscores() {
        let settings =
            ResolveSettings::from_entries([("useInputType_User_Where_id", "x")]).unwrap();

        assert_eq!(settings.use_input_type[0].type_name, "User_Where");
        assert_eq!(settings.hint_for("User_WhereInput", "id"), Some("x"));
    }

    #[test]
    fn rejects_option_without_property() {
        let err = ResolveSettings::from_entries([("useInputType_WhereInput", "x")]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid option useInputType_WhereInput, expected useInputType_{typeName}_{property}"
        );
    }

    #[test]
    fn property_hint_overrides_all() {
        let settings = ResolveSettings::from_entries([
            ("useInputType_WhereInput_ALL", "WhereInput"),
            ("useInputType_WhereInput_author", "RelationFilter"),
        ])
        .unwrap();

        assert_eq!(
            settings.hint_for("ArticleWhereInput", "author"),
            Some("RelationFilter")
        );
        assert_eq!(settings.hint_for("ArticleWhereInput", "tags"), Some("WhereInput"));
        assert_eq!(settings.hint_for("ArticleOrderByInput", "tags"), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let settings = ResolveSettings::from_entries([
            ("useInputType_Where_title", "first"),
            ("useInputType_WhereInput_ALL", "second"),
        ])
        .unwrap();

        assert_eq!(settings.hint_for("ArticleWhereInput", "title"), Some("first"));
        assert_eq!(settings.hint_for("ArticleWhereInput", "body"), None);
    }

    #[test]
    fn merge_overrides_existing_properties() {
        let mut settings =
            ResolveSettings::from_entries([("useInputType_WhereInput_ALL", "a")]).unwrap();

        settings.merge(
            ResolveSettings::from_entries([
                ("useInputType_WhereInput_ALL", "b"),
                ("useInputType_Create_ALL", "c"),
            ])
            .unwrap(),
        );

        assert_eq!(settings.hint_for("UserWhereInput", "id"), Some("b"));
        assert_eq!(settings.hint_for("UserCreateInput", "id"), Some("c"));
    }

    #[test]
    fn deserializes_from_json() {
        let settings: ResolveSettings = serde_json::from_value(serde_json::json!({
            "useInputType": [
                { "typeName": "WhereInput", "properties": { "ALL": "match:*WhereInput" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            settings.hint_for("UserWhereInput", "posts"),
            Some("match:*WhereInput")
        );
    }
}
