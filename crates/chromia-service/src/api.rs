//! HTTP API over the adapter operations.

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Json, Response},
	routing::{get, post},
	Router,
};
use chromia_adapter::ChromiaAdapter;
use chromia_types::{
	AdapterError, FeeEstimate, SendTransactionResult, TransactionRecord, TransferRequest,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument, warn};

pub struct ApiServer {
	host: String,
	port: u16,
	adapter: Arc<ChromiaAdapter>,
}

impl ApiServer {
	pub fn new(host: impl Into<String>, port: u16, adapter: Arc<ChromiaAdapter>) -> Self {
		Self {
			host: host.into(),
			port,
			adapter,
		}
	}

	#[instrument(skip(self, shutdown))]
	pub async fn run<F>(self, shutdown: F) -> anyhow::Result<()>
	where
		F: Future<Output = ()> + Send + 'static,
	{
		let app = router(self.adapter);

		let listener = tokio::net::TcpListener::bind(format!("{}:{}", self.host, self.port)).await?;

		info!("API server listening on {}:{}", self.host, self.port);

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown)
			.await?;

		Ok(())
	}
}

pub fn router(adapter: Arc<ChromiaAdapter>) -> Router {
	Router::new()
		.route("/health", get(health_check))
		.route("/balance", get(get_balance))
		.route("/transactions", post(send_transaction))
		.route("/transactions/{tx_id}", get(get_transaction))
		.route("/addresses/{address}/validate", get(validate_address))
		.route("/fees", get(get_fee_stats))
		.route("/links/transaction/{hash}", get(transaction_link))
		.route("/links/wallet/{address}", get(wallet_link))
		.with_state(adapter)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

/// Adapter failure rendered as `{"error": ...}` with a matching status.
pub struct ApiError(AdapterError);

impl From<AdapterError> for ApiError {
	fn from(err: AdapterError) -> Self {
		Self(err)
	}
}

impl ApiError {
	fn status(&self) -> StatusCode {
		match &self.0 {
			AdapterError::InvalidAccount => StatusCode::NOT_FOUND,
			AdapterError::InvalidInput(_) | AdapterError::Amount(_) => StatusCode::BAD_REQUEST,
			AdapterError::Connection(_) | AdapterError::Ledger(_) => StatusCode::BAD_GATEWAY,
			AdapterError::Session(_) => StatusCode::SERVICE_UNAVAILABLE,
			AdapterError::Config(_) | AdapterError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			warn!("Request failed: {}", self.0);
		}
		(status, Json(json!({ "error": self.0.to_string() }))).into_response()
	}
}

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceQuery {
	#[serde(default)]
	network: String,
	account_id: String,
	asset_id: String,
	blockchain_rid: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionQuery {
	#[serde(default)]
	network: String,
	blockchain_rid: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeeQuery {
	#[serde(default)]
	network: String,
	#[serde(default)]
	account_id: String,
}

#[derive(Debug, Deserialize)]
struct NetworkQuery {
	#[serde(default)]
	network: String,
}

async fn health_check(State(adapter): State<Arc<ChromiaAdapter>>) -> Json<Value> {
	let transfers = if adapter.transfers_enabled() {
		"enabled"
	} else {
		"disabled"
	};
	Json(json!({ "status": "ok", "transfers": transfers }))
}

async fn get_balance(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Query(query): Query<BalanceQuery>,
) -> ApiResult<Value> {
	let balance = adapter
		.get_balance(
			&query.network,
			&query.account_id,
			&query.asset_id,
			&query.blockchain_rid,
		)
		.await?;

	Ok(Json(json!({ "balance": balance })))
}

async fn get_transaction(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Path(tx_id): Path<String>,
	Query(query): Query<TransactionQuery>,
) -> Result<Json<TransactionRecord>, Response> {
	adapter
		.get_transaction(&tx_id, &query.network, &query.blockchain_rid)
		.await
		.map(Json)
		.ok_or_else(|| {
			(
				StatusCode::NOT_FOUND,
				Json(json!({ "error": "Transaction not found" })),
			)
				.into_response()
		})
}

async fn send_transaction(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Json(request): Json<TransferRequest>,
) -> ApiResult<SendTransactionResult> {
	Ok(Json(adapter.send_transaction(request).await?))
}

async fn validate_address(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Path(address): Path<String>,
) -> Json<Value> {
	let valid = adapter.is_valid_wallet_address(&address).await;
	Json(json!({ "address": address, "valid": valid }))
}

async fn get_fee_stats(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Query(query): Query<FeeQuery>,
) -> ApiResult<FeeEstimate> {
	Ok(Json(
		adapter
			.get_fee_stats(&query.network, &query.account_id)
			.await?,
	))
}

async fn transaction_link(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Path(hash): Path<String>,
	Query(query): Query<NetworkQuery>,
) -> Json<Value> {
	Json(json!({ "link": adapter.get_transaction_link(&hash, &query.network) }))
}

async fn wallet_link(
	State(adapter): State<Arc<ChromiaAdapter>>,
	Path(address): Path<String>,
	Query(query): Query<NetworkQuery>,
) -> Json<Value> {
	Json(json!({ "link": adapter.get_wallet_link(&address, &query.network) }))
}
