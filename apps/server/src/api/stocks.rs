use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use command_center_core::{NewsResult, PriceSeries};

use crate::{error::ApiResult, main_lib::AppState};

/// Trailing price history for a ticker, sorted by time.
async fn get_stock_history(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Arc<PriceSeries>>> {
    let series = state.stock_data_service.get_price_history(&ticker).await?;
    Ok(Json(series))
}

/// Trailing company news for a ticker, in provider order.
async fn get_stock_news(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Arc<NewsResult>>> {
    let news = state.stock_data_service.get_news(&ticker).await?;
    Ok(Json(news))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stock-history/{ticker}", get(get_stock_history))
        .route("/stock-news/{ticker}", get(get_stock_news))
}
