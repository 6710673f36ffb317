pub mod dashboard_model;
pub mod icons;
pub mod map_model;
