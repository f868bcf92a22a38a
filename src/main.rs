//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Sincroniza a tabela de privilégios com a lista única do código
    app_state
        .rbac_repo
        .sync_privileges()
        .await
        .expect("Falha ao sincronizar os privilégios do sistema.");

    tracing::info!("✅ Privilégios do sistema sincronizados!");

    // Define as rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de funcionário (protegidas)
    let employee_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route(
            "/{id}/roles/{role_id}",
            post(handlers::rbac::assign_role),
        );

    let room_routes = Router::new()
        .route(
            "/",
            post(handlers::rooms::create_room).get(handlers::rooms::list_rooms),
        )
        .route(
            "/{id}",
            get(handlers::rooms::get_room).put(handlers::rooms::update_room),
        )
        .route("/{id}/status", patch(handlers::rooms::set_room_status));

    let guest_routes = Router::new()
        .route(
            "/",
            post(handlers::guests::create_guest).get(handlers::guests::list_guests),
        )
        .route("/{id}", get(handlers::guests::get_guest));

    let reservation_routes = Router::new()
        .route(
            "/",
            post(handlers::reservations::create_reservation)
                .get(handlers::reservations::list_reservations),
        )
        .route("/{id}", get(handlers::reservations::get_reservation))
        .route("/{id}/billing", get(handlers::reservations::get_billing_snapshot))
        .route("/{id}/checkin", post(handlers::reservations::check_in))
        .route("/{id}/checkout", post(handlers::reservations::check_out))
        .route("/{id}/receipt", get(handlers::reservations::get_receipt));

    let asset_routes = Router::new()
        .route(
            "/",
            post(handlers::assets::create_asset).get(handlers::assets::list_assets),
        )
        .route("/{id}", get(handlers::assets::get_asset))
        .route(
            "/{id}/maintenance",
            post(handlers::assets::record_maintenance).get(handlers::assets::list_maintenance),
        )
        .route("/{id}/costs", get(handlers::assets::get_cost_summary))
        .route(
            "/{id}/return-to-service",
            post(handlers::assets::return_to_service),
        );

    let hr_routes = Router::new()
        .route("/roles", post(handlers::rbac::create_role))
        .route("/privileges", get(handlers::rbac::list_privileges));

    let settings_routes = Router::new().route(
        "/",
        get(handlers::settings::get_settings).put(handlers::settings::update_settings),
    );

    // Tudo que não é login/registro passa pelo auth_guard
    let protected_routes = Router::new()
        .nest("/api/employees", employee_routes)
        .nest("/api/rooms", room_routes)
        .nest("/api/guests", guest_routes)
        .nest("/api/reservations", reservation_routes)
        .nest("/api/assets", asset_routes)
        .nest("/api", hr_routes)
        .nest("/api/settings", settings_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
