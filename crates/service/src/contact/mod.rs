//! Contact records: API value objects, the duplicate checker and the CRUD
//! operations.

pub mod domain;
pub mod duplicates;
pub mod operations;

pub use domain::{Contact, ContactInput};
pub use duplicates::{has_duplicate, has_duplicate_excluding};
pub use operations::{create_contact, delete_contact, get_contact, list_contacts, update_contact};
