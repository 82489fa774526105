//! HTTP presentation layer: a search form and the rendered trades table.

pub mod render;


use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    cli::types::{RoundSet, Season},
    trades::{Aggregator, TradeQuery},
    Result, SleeperError,
};
use render::{page, FormState, PageBody};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

/// Query string of `GET /trades`. Everything is optional so that a bad
/// value renders a page instead of axum's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TradesParams {
    pub username: Option<String>,
    pub season: Option<String>,
    pub rounds: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/trades", get(trades))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `0.0.0.0:port` and serve until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| SleeperError::Server {
            message: e.to_string(),
        })
}

async fn index() -> Html<String> {
    Html(page(&FormState::default(), PageBody::Empty))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_query(params: &TradesParams) -> Result<TradeQuery> {
    let season = non_blank(&params.season)
        .map(str::parse::<Season>)
        .transpose()?;
    let rounds = non_blank(&params.rounds)
        .map(str::parse::<RoundSet>)
        .transpose()?
        .unwrap_or_default();
    Ok(TradeQuery { season, rounds })
}

async fn trades(
    State(state): State<AppState>,
    Query(params): Query<TradesParams>,
) -> (StatusCode, Html<String>) {
    let username = params.username.as_deref().unwrap_or_default().trim();
    let form = FormState {
        username,
        season: non_blank(&params.season),
        rounds: non_blank(&params.rounds),
    };

    let query = match parse_query(&params) {
        Ok(query) => query,
        Err(e) => {
            let message = e.to_string();
            return (
                StatusCode::BAD_REQUEST,
                Html(page(&form, PageBody::Error(&message))),
            );
        }
    };

    match state.aggregator.get_trades(username, &query).await {
        Ok(rows) => (StatusCode::OK, Html(page(&form, PageBody::Trades(&rows)))),
        Err(e) => {
            let (status, message) = if e.is_not_found() {
                (StatusCode::NOT_FOUND, e.to_string())
            } else if matches!(e, SleeperError::InvalidUsername) {
                (StatusCode::BAD_REQUEST, e.to_string())
            } else {
                error!(username, error = %e, "Error fetching trades");
                (
                    StatusCode::BAD_GATEWAY,
                    "An error occurred while fetching trades. See logs.".to_string(),
                )
            };
            (status, Html(page(&form, PageBody::Error(&message))))
        }
    }
}
