//! Domain primitives shared across HR Portal services.
//!
//! Pure types only, no framework dependencies. Import in `usecase/` and
//! `domain/` layers as well as `infra/` adapters that need the naming rules.

pub mod asset_key;
pub mod id;
