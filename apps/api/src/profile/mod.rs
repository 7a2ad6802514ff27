// Candidate self-service profile: display name on `profiles`, contact details on `candidates`.

pub mod handlers;
pub mod service;
