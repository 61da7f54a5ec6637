//! HTTP-level integration tests, driven through the router against the
//! in-memory store.

mod auth_test;
mod helpers;
mod invite_test;
mod rbac_test;
