//! # Extension Registry
//!
//! Typed descriptors for extension fields, keyed by the extended message's
//! schema name and the extension's field number. Schemas register their
//! extensions once at load time; decoders consult the registry when they
//! hit a field number outside the base schema, instead of hanging
//! string-keyed properties off a generic options bag.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{Result, WireError};
use crate::wire::types::{validate_field_number, WireType};

type ExtensionKey = (Cow<'static, str>, u32);

/// Where an extension field lives and how its payload is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    /// Fully-qualified name of the extended message.
    pub message: Cow<'static, str>,
    /// The extension's field number within that message.
    pub field_number: u32,
    /// Fully-qualified extension name, e.g. `gogoproto.stable_marshaler_all`.
    pub name: Cow<'static, str>,
    /// Wire type of the extension's payload.
    pub wire_type: WireType,
}

/// Registry of extension descriptors, resolved at schema-load time.
#[derive(Debug)]
pub struct ExtensionRegistry {
    entries: Arc<RwLock<HashMap<ExtensionKey, ExtensionDescriptor>>>,
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a descriptor; a later registration for the same
    /// (message, field number) replaces the earlier one.
    pub fn register(&self, descriptor: ExtensionDescriptor) -> Result<()> {
        validate_field_number(descriptor.field_number)?;

        let mut entries = self.entries.write().map_err(|_| {
            WireError::RegistryError("Failed to acquire write lock on registry".to_string())
        })?;

        entries.insert(
            (descriptor.message.clone(), descriptor.field_number),
            descriptor,
        );
        Ok(())
    }

    /// Look up the extension registered for `message` at `field_number`.
    pub fn lookup(&self, message: &str, field_number: u32) -> Result<Option<ExtensionDescriptor>> {
        let entries = self.entries.read().map_err(|_| {
            WireError::RegistryError("Failed to acquire read lock on registry".to_string())
        })?;

        // Cow hashes like its str contents, so an owned key matches
        // borrowed registrations
        Ok(entries
            .get(&(Cow::Owned(message.to_owned()), field_number))
            .cloned())
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for ExtensionRegistry {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}
