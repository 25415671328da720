//! HTTP handler functions for the accident map API.
//!
//! Each handler is one explicit request/response step: parse the filter
//! inputs, run the filter engine, then either the aggregation engine (for
//! the table) or the map projection. There is no shared recomputation
//! order — any of the three filter inputs changing simply re-invokes the
//! relevant handler.

use accident_map_accident_models::{MONTH_ABBREVIATIONS, Severity};
use accident_map_analytics::{aggregate, filter};
use accident_map_analytics_models::{FilterCriteria, YearRange};
use accident_map_server_models::{
    ApiHealth, ApiMapPoint, AskRequest, AskResponse, FilterQueryParams, MapResponse, MetaResponse,
    TableResponse,
};
use actix_web::{HttpResponse, web};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/meta`
///
/// Returns the filter bounds and defaults for the UI controls.
pub async fn meta(state: web::Data<AppState>) -> HttpResponse {
    let defaults = FilterCriteria::dashboard_default();

    HttpResponse::Ok().json(MetaResponse {
        min_year: FilterCriteria::MIN_YEAR,
        max_year: FilterCriteria::MAX_YEAR,
        default_years: defaults.years,
        severities: Severity::all().to_vec(),
        parties: state.collection.party_columns().to_vec(),
        default_parties: defaults.parties,
        months: MONTH_ABBREVIATIONS.iter().map(ToString::to_string).collect(),
    })
}

/// `GET /api/map`
///
/// Returns the filtered view as severity-colored scatter points with
/// per-point metadata for hover inspection.
pub async fn map_points(
    state: web::Data<AppState>,
    params: web::Query<FilterQueryParams>,
) -> HttpResponse {
    let criteria = parse_criteria(&params);
    let view = filter(&state.collection, &criteria);

    let points: Vec<ApiMapPoint> = view.iter().filter_map(|r| ApiMapPoint::from_record(r)).collect();
    let total = points.len();

    HttpResponse::Ok().json(MapResponse { points, total })
}

/// `GET /api/table`
///
/// Returns the weekday-by-hour frequency pivot of the filtered view.
pub async fn table(
    state: web::Data<AppState>,
    params: web::Query<FilterQueryParams>,
) -> HttpResponse {
    let criteria = parse_criteria(&params);
    let view = filter(&state.collection, &criteria);
    let pivot = aggregate(&view);
    let total = pivot.total();

    HttpResponse::Ok().json(TableResponse {
        table: pivot,
        total,
    })
}

/// `POST /api/ask`
///
/// Answers a free-text question against the full record collection,
/// independent of active filters. Failures surface as a literal
/// `Error: <message>` answer string.
pub async fn ask(state: web::Data<AppState>, body: web::Json<AskRequest>) -> HttpResponse {
    let question = body.question.trim();
    if question.is_empty() {
        return HttpResponse::Ok().json(AskResponse {
            answer: String::new(),
        });
    }

    let answer = match &state.question_engine {
        Some(engine) => engine.ask(&state.collection, question).await,
        None => "Error: question answering is not configured".to_string(),
    };

    HttpResponse::Ok().json(AskResponse { answer })
}

/// Builds the filter criteria from query parameters, falling back to the
/// dashboard defaults for missing parameters. List parameters are
/// comma-separated; an explicitly empty list selects nothing.
fn parse_criteria(params: &FilterQueryParams) -> FilterCriteria {
    let defaults = FilterCriteria::dashboard_default();

    let years = YearRange::new(
        params.from.unwrap_or(defaults.years.start),
        params.to.unwrap_or(defaults.years.end),
    );

    let severities: Vec<Severity> = params.severities.as_deref().map_or(defaults.severities, |s| {
        s.split(',').filter_map(|c| c.trim().parse().ok()).collect()
    });

    let parties: Vec<String> = params.parties.as_deref().map_or(defaults.parties, |p| {
        p.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    });

    FilterCriteria {
        years,
        severities,
        parties,
    }
}
