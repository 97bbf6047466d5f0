//! HTTP API
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`contratos`] | `/api/contratos`, `/api/contratos/{id}` |
//! | [`health`] | `/health` |

pub mod contratos;
pub mod extract;
pub mod health;

pub use extract::ValidJson;
