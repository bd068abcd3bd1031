pub mod metadata;
pub mod params;
pub mod transaction;

pub use metadata::{create_actions_json, create_get_response, ActionGetResponse, ActionsJson};
pub use params::{DonateParams, DonateQuery};
pub use transaction::{create_post_response, ActionPostRequest, ActionPostResponse};
