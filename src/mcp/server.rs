//! prepcalc MCP Server Implementation
//!
//! Exposes the conversion, scaling and GST tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{IngredientLine, TaxableItem};
use crate::tools::conversion;
use crate::tools::scaling;
use crate::tools::status::StatusTracker;
use crate::tools::tax;

/// prepcalc MCP Service
#[derive(Clone)]
pub struct PrepcalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<PrepcalcService>,
}

impl PrepcalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PrepcalcService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Conversion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeUnitParams {
    /// Unit as written (e.g. "Cup", "tablespoons", "lb")
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    pub quantity: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// Ingredient name, used for density when converting between volume and weight
    pub ingredient: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct VolumeToWeightParams {
    pub quantity: f64,
    /// Volume unit of the quantity (ml, cups, tbsp, ...)
    pub volume_unit: String,
    pub ingredient: String,
    /// Target weight unit (default g)
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeightToVolumeParams {
    pub quantity: f64,
    /// Weight unit of the quantity (g, kg, oz, lbs, ...)
    pub weight_unit: String,
    pub ingredient: String,
    /// Target volume unit (default ml)
    #[serde(default = "default_volume_unit")]
    pub volume_unit: String,
}

fn default_weight_unit() -> String { "g".to_string() }
fn default_volume_unit() -> String { "ml".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientDensityParams {
    pub ingredient: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientPercentageParams {
    pub quantity: f64,
    pub unit: String,
    pub ingredient: String,
    /// Total mass of the recipe in grams
    pub total_recipe_grams: f64,
}

// ============================================================================
// Scaling Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleQuantityParams {
    pub original_quantity: f64,
    /// Servings the quantity was written for (must be > 0)
    pub original_servings: f64,
    /// Servings wanted (guest count)
    pub target_servings: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientLineParams {
    pub id: i64,
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    pub original_percentage: Option<f64>,
}

impl From<IngredientLineParams> for IngredientLine {
    fn from(p: IngredientLineParams) -> Self {
        IngredientLine {
            id: p.id,
            quantity: p.quantity,
            unit: p.unit,
            name: p.name,
            original_percentage: p.original_percentage,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleIngredientsParams {
    pub ingredients: Vec<IngredientLineParams>,
    pub original_servings: f64,
    pub target_servings: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AdjustProportionsParams {
    pub ingredients: Vec<IngredientLineParams>,
    /// ID of the ingredient whose quantity was overridden
    pub modified_ingredient_id: i64,
    /// The overriding quantity, in the ingredient's own unit
    pub new_quantity: f64,
}

// ============================================================================
// Tax Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GstBreakdownParams {
    pub amount: f64,
    /// Whether the amount already includes GST
    #[serde(default)]
    pub inclusive: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TaxableItemParams {
    pub current_stock: f64,
    pub price_per_unit: f64,
    /// Whether price_per_unit includes GST (default false)
    pub gst_inclusive: Option<bool>,
}

impl From<TaxableItemParams> for TaxableItem {
    fn from(p: TaxableItemParams) -> Self {
        TaxableItem {
            current_stock: p.current_stock,
            price_per_unit: p.price_per_unit,
            gst_inclusive: p.gst_inclusive,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TotalWithGstParams {
    pub items: Vec<TaxableItemParams>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PrepcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the prepcalc service including build info, engine constants (GST rate, default density) and process information")]
    async fn prepcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the unit conversion, scaling and GST tools. Call this when unsure which tool fits.")]
    fn calculation_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATION_INSTRUCTIONS)]))
    }

    // --- Conversion ---

    #[tool(description = "Show how a unit string is read: its canonical spelling and class (volume, weight, count)")]
    fn normalize_unit(&self, Parameters(p): Parameters<NormalizeUnitParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversion::normalize(&p.unit))
    }

    #[tool(description = "Convert a quantity between any two units. Volume/weight conversions use the ingredient's density (default density if unknown).")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::convert_units(p.quantity, &p.from_unit, &p.to_unit, p.ingredient.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert a volume of an ingredient to a weight using its density")]
    fn volume_to_weight(&self, Parameters(p): Parameters<VolumeToWeightParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::volume_to_weight(p.quantity, &p.volume_unit, &p.ingredient, &p.weight_unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert a weight of an ingredient to a volume using its density")]
    fn weight_to_volume(&self, Parameters(p): Parameters<WeightToVolumeParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::weight_to_volume(p.quantity, &p.weight_unit, &p.ingredient, &p.volume_unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Look up an ingredient's density in g/ml and whether the default was substituted")]
    fn ingredient_density(&self, Parameters(p): Parameters<IngredientDensityParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversion::ingredient_density(&p.ingredient))
    }

    #[tool(description = "Percentage of a recipe's total mass contributed by one ingredient. Returns 0 when it cannot be computed (count units, unknown units).")]
    fn ingredient_percentage(&self, Parameters(p): Parameters<IngredientPercentageParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversion::ingredient_percentage(p.quantity, &p.unit, &p.ingredient, p.total_recipe_grams))
    }

    // --- Scaling ---

    #[tool(description = "Scale a quantity from the recipe's serving count to a target guest count")]
    fn scale_quantity(&self, Parameters(p): Parameters<ScaleQuantityParams>) -> Result<CallToolResult, McpError> {
        let result = scaling::scale_quantity(p.original_quantity, p.original_servings, p.target_servings)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Scale every ingredient of a recipe from its serving count to a target guest count")]
    fn scale_ingredients(&self, Parameters(p): Parameters<ScaleIngredientsParams>) -> Result<CallToolResult, McpError> {
        let lines: Vec<IngredientLine> = p.ingredients.into_iter().map(IngredientLine::from).collect();
        let result = scaling::scale_ingredients(&lines, p.original_servings, p.target_servings)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Recompute a recipe after one ingredient's quantity was overridden, keeping every other ingredient in proportion")]
    fn adjust_recipe_proportions(&self, Parameters(p): Parameters<AdjustProportionsParams>) -> Result<CallToolResult, McpError> {
        let lines: Vec<IngredientLine> = p.ingredients.into_iter().map(IngredientLine::from).collect();
        let result = scaling::adjust_recipe_proportions(&lines, p.modified_ingredient_id, p.new_quantity)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- GST ---

    #[tool(description = "Split an amount into GST-exclusive, GST and GST-inclusive parts")]
    fn gst_breakdown(&self, Parameters(p): Parameters<GstBreakdownParams>) -> Result<CallToolResult, McpError> {
        let result = tax::gst_breakdown(p.amount, p.inclusive)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Total exclusive, GST and inclusive value of stock items (stock x price), each item either GST-inclusive or exclusive")]
    fn calculate_total_with_gst(&self, Parameters(p): Parameters<TotalWithGstParams>) -> Result<CallToolResult, McpError> {
        let items: Vec<TaxableItem> = p.items.into_iter().map(TaxableItem::from).collect();
        let result = tax::calculate_total_with_gst(&items)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PrepcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "prepcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("prepcalc catering measurement engine".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "prepcalc - unit conversion, guest-count scaling and GST for catering recipes. \
                 Call calculation_instructions first if unsure. \
                 Units: normalize_unit, convert_units, volume_to_weight, weight_to_volume, ingredient_density. \
                 Recipes: scale_quantity, scale_ingredients, adjust_recipe_proportions, ingredient_percentage. \
                 GST: gst_breakdown, calculate_total_with_gst. \
                 Status: prepcalc_status."
                    .into(),
            ),
        }
    }
}
