//! Pages
//!
//! Top-level page components for each route.

pub mod overview;
pub mod departments;
pub mod vehicles;
pub mod vehicle_detail;
pub mod department_detail;
pub mod data_management;

pub use overview::Overview;
pub use departments::Departments;
pub use vehicles::Vehicles;
pub use vehicle_detail::VehicleDetail;
pub use department_detail::DepartmentDetail;
pub use data_management::DataManagement;
