// Result submission, DISC scoring of stored answers, reports and the candidate dashboard.
// Scoring itself lives in `disc`; this module owns lookups, authorization and persistence.

pub mod handlers;
pub mod service;
