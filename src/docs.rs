// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Rooms ---
        handlers::rooms::create_room,
        handlers::rooms::list_rooms,
        handlers::rooms::get_room,
        handlers::rooms::update_room,
        handlers::rooms::set_room_status,

        // --- Guests ---
        handlers::guests::create_guest,
        handlers::guests::list_guests,
        handlers::guests::get_guest,

        // --- Reservations ---
        handlers::reservations::create_reservation,
        handlers::reservations::list_reservations,
        handlers::reservations::get_reservation,
        handlers::reservations::get_billing_snapshot,
        handlers::reservations::check_in,
        handlers::reservations::check_out,
        handlers::reservations::get_receipt,

        // --- Assets ---
        handlers::assets::create_asset,
        handlers::assets::list_assets,
        handlers::assets::get_asset,
        handlers::assets::record_maintenance,
        handlers::assets::list_maintenance,
        handlers::assets::get_cost_summary,
        handlers::assets::return_to_service,

        // --- HR / RBAC ---
        handlers::rbac::create_role,
        handlers::rbac::list_privileges,
        handlers::rbac::assign_role,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Employee,
            models::auth::RegisterEmployeePayload,
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Rooms ---
            models::rooms::RoomStatus,
            models::rooms::Room,
            handlers::rooms::CreateRoomPayload,
            handlers::rooms::UpdateRoomPayload,
            handlers::rooms::SetRoomStatusPayload,

            // --- Guests ---
            models::guests::Guest,
            handlers::guests::CreateGuestPayload,

            // --- Reservations / Billing ---
            models::reservations::ReservationStatus,
            models::reservations::Reservation,
            models::reservations::BillingSnapshot,
            models::reservations::TransactionOutcome,
            models::billing::PaymentMethod,
            models::billing::StayCharges,
            models::billing::BillingAdjustments,
            models::billing::CheckinChecklist,
            models::billing::BillingResult,
            handlers::reservations::CreateReservationPayload,
            handlers::reservations::CheckInPayload,
            handlers::reservations::CheckOutPayload,

            // --- Assets ---
            models::assets::AssetStatus,
            models::assets::Asset,
            models::assets::MaintenanceRecord,
            models::assets::MaintenanceCostSummary,
            handlers::assets::CreateAssetPayload,
            handlers::assets::RecordMaintenancePayload,

            // --- HR / RBAC ---
            models::rbac::Role,
            models::rbac::Privilege,
            models::rbac::CreateRolePayload,
            models::rbac::RoleResponse,

            // --- Settings ---
            models::settings::HotelSettings,
            models::settings::UpdateSettingsPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro de Funcionários"),
        (name = "Rooms", description = "Gestão de Quartos"),
        (name = "Guests", description = "Cadastro de Hóspedes"),
        (name = "Reservations", description = "Reservas, Check-in/Checkout e Cobrança da Estadia"),
        (name = "Assets", description = "Patrimônio e Manutenção"),
        (name = "HR", description = "Cargos e Privilégios"),
        (name = "Settings", description = "Configurações do Hotel")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
