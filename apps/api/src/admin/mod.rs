// Company-scoped read models for admins: dashboard counters, candidate list, candidate detail.

pub mod handlers;
pub mod service;
