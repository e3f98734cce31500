use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{debug, info, instrument};

use crate::{
    dto::{HostResponse, IpResponse, MacResponse, TopologyResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/network/ip-for-mac/{mac}", get(get_ip_for_mac))
        .route("/network/mac-for-ip/{ip}", get(get_mac_for_ip))
        .route("/network/primary-address", get(get_primary_address))
        .route("/network/topology", get(get_topology))
        .route("/network/hosts", get(get_local_hosts))
        .route("/network/known-hosts/{ip}", post(reconcile_known_host))
}

#[instrument(skip(state), name = "api_ip_for_mac")]
async fn get_ip_for_mac(
    State(state): State<AppState>,
    Path(mac): Path<String>,
) -> Result<Json<IpResponse>, ApiError> {
    let ip = state.resolve_address.ip_for_mac(&mac).await?;
    Ok(Json(IpResponse { ip }))
}

#[instrument(skip(state), name = "api_mac_for_ip")]
async fn get_mac_for_ip(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<MacResponse>, ApiError> {
    let mac = state.resolve_address.mac_for_ip(&ip).await?;
    Ok(Json(MacResponse { mac }))
}

#[instrument(skip(state), name = "api_primary_address")]
async fn get_primary_address(State(state): State<AppState>) -> Result<Json<String>, ApiError> {
    let address = state.get_primary_address.execute().await?;

    debug!(address = %address, "Primary address resolved");
    Ok(Json(address.to_string()))
}

#[instrument(skip(state), name = "api_topology")]
async fn get_topology(State(state): State<AppState>) -> Result<Json<TopologyResponse>, ApiError> {
    let classification = state.get_topology.execute().await?;
    Ok(Json(TopologyResponse::from_classification(&classification)?))
}

#[instrument(skip(state), name = "api_local_hosts")]
async fn get_local_hosts(
    State(state): State<AppState>,
) -> Result<Json<Vec<HostResponse>>, ApiError> {
    let hosts = state.discover_hosts.execute().await?;

    debug!(count = hosts.len(), "Local hosts discovered");
    Ok(Json(hosts.into_iter().map(HostResponse::from).collect()))
}

#[instrument(skip(state), name = "api_reconcile_known_host")]
async fn reconcile_known_host(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.reconcile_known_host.execute(&ip).await?;

    info!(ip = %ip, "Known host reconciled");
    Ok(StatusCode::NO_CONTENT)
}
