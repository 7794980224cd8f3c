//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable from phones on the rink wifi.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_FILE (path of the JSON store).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use hockey_lineup_web::{
    assign_to_lineup, clear_lineup_slot, export_backup, game_sheet, import_backup,
    move_within_ready, remove_from_ready, set_player_status, ErrorKind, GameId, GameInfoUpdate,
    Planner, PlannerError, PlayerStatus, Position, Storage,
};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Server-side state: the planner plus the storage it persists to.
struct AppData {
    planner: Planner,
    storage: Storage,
}

type AppState = Data<RwLock<AppData>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
    #[serde(default)]
    number: u32,
    position: Position,
}

#[derive(Deserialize)]
struct StatusBody {
    /// `null` clears the status.
    status: Option<PlayerStatus>,
}

#[derive(Deserialize)]
struct AssignBody {
    player_id: Uuid,
}

#[derive(Deserialize)]
struct MoveBody {
    from: usize,
    to: usize,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

/// Path segments: game id and player id.
#[derive(Deserialize)]
struct GamePlayerPath {
    id: GameId,
    player_id: Uuid,
}

/// Path segments: game id and slot index.
#[derive(Deserialize)]
struct GameSlotPath {
    id: GameId,
    slot: usize,
}

#[derive(Deserialize)]
struct PlayerPath {
    player_id: Uuid,
}

/// Map an operation error onto an HTTP response with an `{"error": ...}` body.
fn error_response(e: &PlannerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Persist after a successful mutation and respond with the full state
/// (clients re-render from the whole document).
fn save_and_respond(app: &AppData) -> HttpResponse {
    match app.storage.save(&app.planner) {
        Ok(()) => HttpResponse::Ok().json(&app.planner),
        Err(e) => {
            log::error!("Failed to save planner data: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to save data" }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "hockey-lineup-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full planner state: the roster and every saved game.
#[get("/api/state")]
async fn api_get_state(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.planner)
}

/// Add a player to the roster.
#[post("/api/team/players")]
async fn api_add_player(state: AppState, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.planner.add_player(&body.name, body.number, body.position) {
        Ok(_) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Edit a roster player; the change propagates into every game.
#[put("/api/team/players/{player_id}")]
async fn api_edit_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g
        .planner
        .edit_player(path.player_id, &body.name, body.number, body.position)
    {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Remove a player from the roster and from every game.
#[delete("/api/team/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.planner.remove_player(path.player_id) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Create a new game with a generated title and today's date.
#[post("/api/games")]
async fn api_create_game(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.planner.create_game();
    save_and_respond(&g)
}

/// Get one game by id.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.planner.game(path.id) {
        Some(game) => HttpResponse::Ok().json(game),
        None => error_response(&PlannerError::GameNotFound(path.id)),
    }
}

#[delete("/api/games/{id}")]
async fn api_delete_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.planner.delete_game(path.id) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Update a game's descriptive fields (title, date, stadium, ...).
#[put("/api/games/{id}/info")]
async fn api_update_game_info(
    state: AppState,
    path: Path<GamePath>,
    body: Json<GameInfoUpdate>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.planner.update_game_info(path.id, body.into_inner()) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Set or clear (status = null) a player's availability for one game.
#[put("/api/games/{id}/players/{player_id}/status")]
async fn api_set_status(
    state: AppState,
    path: Path<GamePlayerPath>,
    body: Json<StatusBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match set_player_status(&mut g.planner, path.id, path.player_id, body.status) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Place a ready-list player into a lineup slot (target must be empty).
#[put("/api/games/{id}/lineup/{slot}")]
async fn api_assign_lineup(
    state: AppState,
    path: Path<GameSlotPath>,
    body: Json<AssignBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match assign_to_lineup(&mut g.planner, path.id, path.slot, body.player_id) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Empty a lineup slot.
#[delete("/api/games/{id}/lineup/{slot}")]
async fn api_clear_lineup_slot(state: AppState, path: Path<GameSlotPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match clear_lineup_slot(&mut g.planner, path.id, path.slot) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Relocate a player between two ready-list slots.
#[put("/api/games/{id}/ready/move")]
async fn api_move_ready(
    state: AppState,
    path: Path<GamePath>,
    body: Json<MoveBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match move_within_ready(&mut g.planner, path.id, body.from, body.to) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Remove a player from a ready slot (also leaves the lineup, status cleared).
#[delete("/api/games/{id}/ready/{slot}")]
async fn api_remove_ready(state: AppState, path: Path<GameSlotPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match remove_from_ready(&mut g.planner, path.id, path.slot) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

/// Printable sheet for one game: ordered ready list, goalie panel, lines.
#[get("/api/games/{id}/sheet")]
async fn api_game_sheet(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.planner.game(path.id) {
        Some(game) => HttpResponse::Ok().json(game_sheet(game)),
        None => error_response(&PlannerError::GameNotFound(path.id)),
    }
}

/// Download a backup of the whole planner state.
#[get("/api/backup")]
async fn api_export_backup(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(export_backup(&g.planner))
}

/// Restore from a backup file; replaces the roster and all games.
#[post("/api/backup")]
async fn api_import_backup(state: AppState, body: web::Bytes) -> HttpResponse {
    let raw = match std::str::from_utf8(&body) {
        Ok(s) => s,
        Err(_) => {
            return error_response(&PlannerError::InvalidBackup("not valid UTF-8".into()))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match import_backup(&mut g.planner, raw) {
        Ok(()) => save_and_respond(&g),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "hockey-lineup.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| default_data_file());
    let bind = (host.as_str(), port);

    let storage = Storage::new(&data_file);
    let planner = storage.load()?;
    log::info!(
        "Loaded {} player(s) and {} game(s) from {}",
        planner.team.len(),
        planner.games.len(),
        data_file
    );
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppData { planner, storage }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_state)
            .service(api_add_player)
            .service(api_edit_player)
            .service(api_remove_player)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_delete_game)
            .service(api_update_game_info)
            .service(api_set_status)
            .service(api_assign_lineup)
            .service(api_clear_lineup_slot)
            .service(api_move_ready)
            .service(api_remove_ready)
            .service(api_game_sheet)
            .service(api_export_backup)
            .service(api_import_backup)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
