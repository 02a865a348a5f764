//! Entity models: row structs and Create/Update DTOs.

pub mod assessment;
pub mod disorder;
pub mod question;
pub mod remedy;
