pub mod check_list;
pub mod color_settings;
