//! Single binary web server: JSON API over the Mexicano tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT. Default tournament settings come from
//! MEXICANO_TOTAL_ROUNDS, MEXICANO_ADVANCEMENT and MEXICANO_LATE_ROUNDS.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use mexicano_tournament::{
    commit_round, leaderboard_csv, parse_player_names, setup, submit_score, AdvancementPolicy,
    LateRoundPolicy, MatchId, PlayerId, Tournament, TournamentConfig, TournamentId,
    DEFAULT_TOTAL_ROUNDS,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. The write lock serializes every mutation,
/// so score submission and commit never race within one tournament.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    /// Player names in seeding order.
    #[serde(default)]
    players: Vec<String>,
    /// Alternative to `players`: one name per line.
    #[serde(default)]
    players_text: Option<String>,
    #[serde(default)]
    config: Option<TournamentConfig>,
}

#[derive(Deserialize)]
struct SubmitScoreBody {
    match_id: MatchId,
    score_a: u8,
    score_b: u8,
}

#[derive(Serialize)]
struct LeaderboardEntry {
    player: PlayerId,
    points: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn env_value<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

/// Tournament settings used when a create request carries no config.
fn default_config() -> TournamentConfig {
    TournamentConfig {
        advancement: env_value::<AdvancementPolicy>("MEXICANO_ADVANCEMENT").unwrap_or_default(),
        late_rounds: env_value::<LateRoundPolicy>("MEXICANO_LATE_ROUNDS").unwrap_or_default(),
        total_rounds: std::env::var("MEXICANO_TOTAL_ROUNDS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TOTAL_ROUNDS),
        ..TournamentConfig::default()
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "mexicano-tournament",
    })
}

/// Create a tournament from 12 names; round 1 is scheduled right away.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let names = match body.players_text {
        Some(text) if body.players.is_empty() => parse_player_names(&text),
        _ => body.players,
    };
    let config = body.config.unwrap_or_else(default_config);
    let tournament = match setup(names, config) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
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
        None => not_found(),
    }
}

/// The round currently accepting scores (null once complete).
#[get("/api/tournaments/{id}/round")]
async fn api_current_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(&path.id) {
        Some(entry) => HttpResponse::Ok().json(entry.tournament.current_round()),
        None => not_found(),
    }
}

/// Enter the score for one match. Ties and 0-0 are stored but reported as errors.
#[put("/api/tournaments/{id}/matches/score")]
async fn api_submit_score(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<SubmitScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match submit_score(&mut entry.tournament, body.match_id, body.score_a, body.score_b) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => bad_request(e),
    }
}

/// Commit the current round and schedule the next (or complete the tournament).
#[post("/api/tournaments/{id}/rounds/commit")]
async fn api_commit_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match commit_round(t) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

#[get("/api/tournaments/{id}/leaderboard")]
async fn api_leaderboard(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(&path.id) {
        Some(entry) => {
            let rows: Vec<LeaderboardEntry> = entry
                .tournament
                .leaderboard()
                .into_iter()
                .map(|(player, points)| LeaderboardEntry { player, points })
                .collect();
            HttpResponse::Ok().json(rows)
        }
        None => not_found(),
    }
}

#[get("/api/tournaments/{id}/leaderboard.csv")]
async fn api_leaderboard_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    match leaderboard_csv(&entry.tournament) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
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
    log::info!("Default tournament config: {:?}", default_config());

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
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
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_current_round)
            .service(api_submit_score)
            .service(api_commit_round)
            .service(api_leaderboard)
            .service(api_leaderboard_csv)
    })
    .bind(bind)?
    .run()
    .await
}
