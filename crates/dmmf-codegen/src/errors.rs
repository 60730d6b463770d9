use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cannot get matching input type from {}", describe_candidates(.candidates))]
    Disambiguation { candidates: Vec<String> },
}

fn describe_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        "zero length input types".into()
    } else {
        candidates.join(", ")
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::ResolveError;

    #[test]
    fn lists_candidate_names() {
        let err = ResolveError::Disambiguation {
            candidates: vec!["UserWhereInput".into(), "UserRelationFilter".into()],
        };

        assert_eq!(
            err.to_string(),
            "cannot get matching input type from UserWhereInput, UserRelationFilter"
        );
    }

    #[test]
    fn notes_empty_candidate_set() {
        let err = ResolveError::Disambiguation { candidates: vec![] };

        assert_eq!(
            err.to_string(),
            "cannot get matching input type from zero length input types"
        );
    }
}
