pub(crate) mod content_slot;
