//! Because consistency is great!
//!
pub mod uri;
