//! Inspection helpers on [`Fault`].

use std::any::TypeId;

use super::types::Fault;

impl Fault {
    /// Reports whether the stored error's concrete type is `E`.
    ///
    /// This is an exact dynamic-type test; wrap an error family in a single
    /// enum to recover on the whole family at once.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.type_id == TypeId::of::<E>()
    }

    /// Borrows the stored error as a concrete `E`, if that is its type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let erased: &(dyn std::error::Error + 'static) = &*self.payload;
        erased.downcast_ref::<E>()
    }

    /// Name of the concrete error type recorded at construction.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the stored error as a trait object.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.payload
    }
}
