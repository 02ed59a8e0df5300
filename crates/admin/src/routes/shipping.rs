//! Shipping method settings routes.
//!
//! The weight-based cost editor works without JavaScript: every button posts
//! the whole table back with an `action`, and the server answers with the
//! re-rendered editor (`add_line`, `delete:{key}`, failed `save`) or a
//! redirect after a successful save.

use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, RawForm, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use larder_core::ShippingMethodId;

use crate::components::{EditorRowView, WeightBasedPriceEditor};
use crate::db::ShippingMethodRepository;
use crate::error::AppError;
use crate::forms::{self, EditorAction};
use crate::models::ShippingMethod;
use crate::state::AppState;
use crate::validation::ValidationErrors;

// =============================================================================
// Templates
// =============================================================================

/// Weight-based cost editor page.
#[derive(Template)]
#[template(path = "shipping/weight_based_cost.html")]
pub struct WeightBasedCostTemplate {
    pub current_path: String,
    pub method_id: ShippingMethodId,
    /// Only known on the initial GET; re-renders come from the form alone.
    pub method_name: Option<String>,
    pub rows: Vec<EditorRowView>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl WeightBasedCostTemplate {
    fn new(method_id: ShippingMethodId, editor: &WeightBasedPriceEditor) -> Self {
        Self {
            current_path: editor_path(method_id),
            method_id,
            method_name: None,
            rows: editor.rows(),
            success_message: None,
            error_message: None,
        }
    }

    fn into_response_with(self, status: StatusCode) -> Response {
        match self.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => AppError::Internal(format!("template render error: {e}")).into_response(),
        }
    }
}

/// Build the shipping settings router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/shipping/methods/{id}/weight-based-cost",
        get(edit_page).post(submit),
    )
}

fn editor_path(id: ShippingMethodId) -> String {
    format!("/shipping/methods/{id}/weight-based-cost")
}

// =============================================================================
// Query Parameters
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct EditorQueryParams {
    pub success: Option<String>,
}

// =============================================================================
// Route Handlers
// =============================================================================

/// GET /shipping/methods/{id}/weight-based-cost - Editor with the stored lines.
#[instrument(skip(state))]
async fn edit_page(
    State(state): State<AppState>,
    Path(id): Path<ShippingMethodId>,
    Query(params): Query<EditorQueryParams>,
) -> Result<Response, AppError> {
    let method = load_method(&state, id).await?;
    let editor = WeightBasedPriceEditor::new(method.weight_based_cost.lines());

    let mut template = WeightBasedCostTemplate::new(id, &editor);
    template.method_name = Some(method.name);
    template.success_message = params.success.as_deref().map(|s| match s {
        "saved" => "Shipping costs saved.".to_string(),
        _ => format!("Success: {s}"),
    });

    Ok(template.into_response_with(StatusCode::OK))
}

/// POST /shipping/methods/{id}/weight-based-cost - Apply an editor action.
#[instrument(skip(state, body))]
async fn submit(
    State(state): State<AppState>,
    Path(id): Path<ShippingMethodId>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let form = forms::parse_weight_based_cost(&body)?;
    let mut editor = WeightBasedPriceEditor::from_form(form.rows);

    match form.action {
        EditorAction::AddLine => {
            editor.add_line();
            Ok(WeightBasedCostTemplate::new(id, &editor).into_response_with(StatusCode::OK))
        }
        EditorAction::Delete(key) => {
            if !editor.delete_line(&key) {
                tracing::debug!(key = %key, "Delete requested for unknown row");
            }
            Ok(WeightBasedCostTemplate::new(id, &editor).into_response_with(StatusCode::OK))
        }
        EditorAction::Save => match editor.validate() {
            Ok(table) => {
                ShippingMethodRepository::new(state.pool())
                    .save_weight_based_cost(id, &table)
                    .await?;
                tracing::info!(
                    shipping_method_id = %id,
                    lines = table.lines().len(),
                    "Weight-based shipping costs saved"
                );
                Ok(Redirect::to(&format!("{}?success=saved", editor_path(id))).into_response())
            }
            Err(errors) => Ok(invalid_response(id, &editor, &errors)),
        },
    }
}

fn invalid_response(
    id: ShippingMethodId,
    editor: &WeightBasedPriceEditor,
    errors: &ValidationErrors,
) -> Response {
    let mut template = WeightBasedCostTemplate::new(id, editor);
    template.rows = editor.rows_with_errors(errors);
    template.error_message = Some("Please fix the highlighted fields.".to_string());
    template.into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
}

async fn load_method(state: &AppState, id: ShippingMethodId) -> Result<ShippingMethod, AppError> {
    ShippingMethodRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("shipping method {id}")))
}
