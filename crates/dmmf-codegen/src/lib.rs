//! Selects the GraphQL input type generated classes annotate each field with,
//! out of the candidates a Prisma DMMF document lists for it.

mod candidate;
pub mod dmmf;
mod errors;
mod fields;
mod hint;
pub mod matcher;
mod resolver;
pub mod settings;

pub use candidate::{TypeCandidate, TypeLocation};
pub use errors::ResolveError;
pub use fields::{resolve_document, resolve_input_type, ResolvedField, ResolvedObject};
pub use hint::Hint;
pub use resolver::select_input_type;
