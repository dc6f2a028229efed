//! Auth types shared across Campus services.
//!
//! Provides the `IdentityHeaders` extractor for gateway-injected caller identity.

pub mod identity;
