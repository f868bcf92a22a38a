pub mod auth_service;
pub use auth_service::AuthService;
pub mod billing_service;
pub mod maintenance_service;
pub use maintenance_service::MaintenanceService;
pub mod rbac_service;
pub use rbac_service::RbacService;
pub mod receipt_service;
pub use receipt_service::ReceiptService;
pub mod reservation_service;
pub use reservation_service::ReservationService;
