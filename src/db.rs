pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod room_repo;
pub use room_repo::RoomRepository;
pub mod guest_repo;
pub use guest_repo::GuestRepository;
pub mod reservation_repo;
pub use reservation_repo::ReservationRepository;
pub mod asset_repo;
pub use asset_repo::AssetRepository;
pub mod rbac_repo;
pub use rbac_repo::RbacRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
