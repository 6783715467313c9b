pub mod plane_view;
pub mod view_config;
pub mod view_state;
