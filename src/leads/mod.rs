//! Lead capture: the records the site's forms produce and where they are kept.

mod model;
mod store;

pub use model::{
    Lead, LeadError, LeadIntent, LeadSource, LeadSubmission, LeadType, MAX_MESSAGE_LEN,
    MAX_NAME_LEN, MAX_PHONE_LEN,
};
pub use store::LeadStore;
