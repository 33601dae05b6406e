// Resume data model: schema, validation, entry sequences, derived lists and
// the edit reducer. Everything here is pure and synchronous; the form, the
// templates and the PDF export all go through this module.

pub mod derive;
pub mod edit;
pub mod entries;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod validation;

pub use derive::{derive_responsibility_lines, derive_skill_list};
pub use entries::ModelError;
pub use ids::{IdGenerator, UuidIdGenerator};
pub use models::{default_record, ResumeRecord};
pub use validation::{validate, FieldErrors};
