pub(crate) mod sidebar;
pub(crate) mod window;
