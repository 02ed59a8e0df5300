//! Decoding of the weight-based cost editor form.
//!
//! The editor posts `application/x-www-form-urlencoded` fields using
//! bracketed array names:
//!
//! ```text
//! weight_based_cost[0][key]=k3x9a2q
//! weight_based_cost[0][min_weight]=0
//! weight_based_cost[0][cost]=5
//! weight_based_cost[1][key]=...
//! action=save
//! ```
//!
//! Rows come back sorted by index. Gaps in the indexes are fine (a row
//! deleted client-side leaves one). Fields outside `weight_based_cost` other
//! than `action` are ignored.

use std::collections::BTreeMap;

use thiserror::Error;

/// Prefix of the array field names.
pub const FIELD_PREFIX: &str = "weight_based_cost";

/// Field name for a row's minimum weight at `index`.
#[must_use]
pub fn min_weight_field(index: usize) -> String {
    format!("{FIELD_PREFIX}[{index}][min_weight]")
}

/// Field name for a row's cost at `index`.
#[must_use]
pub fn cost_field(index: usize) -> String {
    format!("{FIELD_PREFIX}[{index}][cost]")
}

/// Field name for a row's hidden key at `index`.
#[must_use]
pub fn key_field(index: usize) -> String {
    format!("{FIELD_PREFIX}[{index}][key]")
}

/// Errors decoding the editor form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A `weight_based_cost[...]` field name that does not parse.
    #[error("malformed field name: {0}")]
    MalformedField(String),

    /// The submit button value is not a known action.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// What the submit button asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Append a blank row.
    AddLine,
    /// Remove the row with this key.
    Delete(String),
    /// Validate and store.
    Save,
}

impl EditorAction {
    /// Parse an `action` value: `add_line`, `delete:{key}` or `save`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownAction`] for anything else.
    pub fn parse(value: &str) -> Result<Self, FormError> {
        match value {
            "add_line" => Ok(Self::AddLine),
            "save" => Ok(Self::Save),
            other => other
                .strip_prefix("delete:")
                .filter(|key| !key.is_empty())
                .map(|key| Self::Delete(key.to_string()))
                .ok_or_else(|| FormError::UnknownAction(other.to_string())),
        }
    }
}

/// One submitted row, values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRow {
    /// Array index the row was submitted under.
    pub index: usize,
    /// Row key from the hidden field, if present.
    pub key: Option<String>,
    pub min_weight: String,
    pub cost: String,
}

/// The decoded editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightBasedCostForm {
    pub action: EditorAction,
    /// Rows in ascending index order.
    pub rows: Vec<FormRow>,
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Key,
    MinWeight,
    Cost,
}

/// Decode an urlencoded form body.
///
/// A missing `action` means `save` (the form was submitted with Enter).
///
/// # Errors
///
/// Returns [`FormError`] for malformed array field names or an unknown action.
pub fn parse_weight_based_cost(body: &[u8]) -> Result<WeightBasedCostForm, FormError> {
    let mut action = None;
    let mut rows: BTreeMap<usize, FormRow> = BTreeMap::new();

    for (name, value) in url::form_urlencoded::parse(body) {
        if name == "action" {
            action = Some(EditorAction::parse(&value)?);
            continue;
        }

        let Some((index, column)) = parse_field_name(&name)? else {
            continue;
        };

        let row = rows.entry(index).or_insert_with(|| FormRow {
            index,
            ..FormRow::default()
        });
        let value = value.into_owned();
        match column {
            Column::Key => row.key = Some(value).filter(|k| !k.is_empty()),
            Column::MinWeight => row.min_weight = value,
            Column::Cost => row.cost = value,
        }
    }

    Ok(WeightBasedCostForm {
        action: action.unwrap_or(EditorAction::Save),
        rows: rows.into_values().collect(),
    })
}

/// `Ok(None)` for fields outside the array; an error for malformed array fields.
fn parse_field_name(name: &str) -> Result<Option<(usize, Column)>, FormError> {
    let Some(rest) = name.strip_prefix(FIELD_PREFIX) else {
        return Ok(None);
    };
    let malformed = || FormError::MalformedField(name.to_string());

    let rest = rest.strip_prefix('[').ok_or_else(malformed)?;
    let (index, rest) = rest.split_once("][").ok_or_else(malformed)?;
    let column = rest.strip_suffix(']').ok_or_else(malformed)?;

    let index = index.parse::<usize>().map_err(|_| malformed())?;
    let column = match column {
        "key" => Column::Key,
        "min_weight" => Column::MinWeight,
        "cost" => Column::Cost,
        // Unknown per-row columns are ignored
        _ => return Ok(None),
    };

    Ok(Some((index, column)))
}
