//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use darts_bracket_web::{
    add_side, get_layout_data, remove_side, side_changed, AddSideOptions, LayoutContext,
    MatchOptions, Round, Tournament, TournamentId, TournamentPlayer, TournamentSide, UuidSource,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after long inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    /// The night the bracket is thrown; defaults to now.
    date: Option<DateTime<Utc>>,
    match_options: Option<MatchOptions>,
}

#[derive(Deserialize)]
struct AddSideBody {
    name: String,
    #[serde(default)]
    players: Vec<String>,
    #[serde(default)]
    add_as_individuals: bool,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and side id.
#[derive(Deserialize)]
struct TournamentSidePath {
    id: TournamentId,
    side_id: Uuid,
}

/// Path segments: tournament id and roster index.
#[derive(Deserialize)]
struct TournamentSideIndexPath {
    id: TournamentId,
    index: usize,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "darts-bracket-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    body: Option<Json<CreateTournamentBody>>,
) -> HttpResponse {
    let date = body
        .as_ref()
        .and_then(|b| b.date)
        .unwrap_or_else(Utc::now);
    let mut tournament = Tournament::new(date);
    if let Some(options) = body.as_ref().and_then(|b| b.match_options) {
        tournament.match_options = options;
    }
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().tournament)
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Add a side to the roster (optionally one side per listed player).
#[post("/api/tournaments/{id}/sides")]
async fn api_add_side(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddSideBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let mut ids = UuidSource;
    let players: Vec<TournamentPlayer> = body
        .players
        .iter()
        .map(|name| TournamentPlayer::new(Uuid::new_v4(), name.trim()))
        .collect();
    let new_side = TournamentSide::new(Uuid::nil(), body.name.clone()).with_players(players);
    let options = AddSideOptions {
        add_as_individuals: body.add_as_individuals,
    };
    entry.tournament = add_side(&entry.tournament, &new_side, options, &mut ids);
    HttpResponse::Ok().json(&entry.tournament)
}

/// Replace the side at a roster index; the update is propagated into any
/// recorded match referencing the side.
#[put("/api/tournaments/{id}/sides/{index}")]
async fn api_update_side(
    state: AppState,
    path: Path<TournamentSideIndexPath>,
    body: Json<TournamentSide>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    if path.index >= entry.tournament.sides.len() {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No side at index" }));
    }
    entry.tournament = side_changed(&entry.tournament, &body, path.index);
    HttpResponse::Ok().json(&entry.tournament)
}

/// Remove a side from the roster by id.
#[delete("/api/tournaments/{id}/sides/{side_id}")]
async fn api_remove_side(state: AppState, path: Path<TournamentSidePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let side = match entry.tournament.sides.iter().find(|s| s.id == path.side_id) {
        Some(s) => s.clone(),
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No side" })),
    };
    entry.tournament = remove_side(&entry.tournament, &side);
    HttpResponse::Ok().json(&entry.tournament)
}

/// Store the recorded round chain (scores entered elsewhere in the UI).
#[put("/api/tournaments/{id}/round")]
async fn api_set_round(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<Round>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    entry.tournament.round = Some(body.into_inner());
    HttpResponse::Ok().json(&entry.tournament)
}

/// Render-ready bracket layout for the tournament.
#[get("/api/tournaments/{id}/layout")]
async fn api_layout(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &entry.tournament;
    let side_link = |side: &TournamentSide| Some(format!("/sides/{}", side.id));
    let context = LayoutContext::with_side_link(t.match_options, &side_link);
    let layout = get_layout_data(t.round.as_ref(), &t.sides, &context);
    HttpResponse::Ok().json(layout)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive tournament(s) (no activity for 12h)",
                    removed
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_side)
            .service(api_update_side)
            .service(api_remove_side)
            .service(api_set_round)
            .service(api_layout)
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
