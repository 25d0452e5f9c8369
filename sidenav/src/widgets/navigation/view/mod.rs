pub(crate) mod nav_list;
