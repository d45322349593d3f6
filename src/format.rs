use crate::error::SolveError;
use crate::instance::Instance;
use crate::limits::Limits;

pub fn format_answer(reachable: bool) -> &'static str {
    if reachable {
        "Yes"
    } else {
        "No"
    }
}

/// Parse `n targetCost targetWeight` followed by `n` lines of `cost weight`.
///
/// Any whitespace separates tokens. Trailing tokens are rejected so a wrong `n`
/// does not go unnoticed.
pub fn parse_instance(text: &str, limits: &Limits) -> Result<Instance, SolveError> {
    let mut tokens = text.split_ascii_whitespace();
    let mut next = |what: &dyn Fn() -> String| -> Result<i64, SolveError> {
        let token = tokens
            .next()
            .ok_or_else(|| SolveError::invalid(format!("missing {}", what())))?;
        token
            .parse::<i64>()
            .map_err(|e| SolveError::invalid(format!("{} {token:?}: {e}", what())))
    };

    let n = next(&|| "item count".to_string())?;
    let n = usize::try_from(n)
        .map_err(|_| SolveError::invalid(format!("item count must be non-negative, got {n}")))?;
    // Reject before reading (and allocating for) a huge item list.
    if n > limits.n_max {
        return Err(SolveError::CapacityExceeded {
            field: "n",
            value: n,
            max: limits.n_max,
        });
    }
    let target_cost = next(&|| "target cost".to_string())?;
    let target_weight = next(&|| "target weight".to_string())?;

    let mut costs = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for idx in 0..n {
        costs.push(next(&|| format!("cost of item {idx}"))?);
        weights.push(next(&|| format!("weight of item {idx}"))?);
    }

    if let Some(extra) = tokens.next() {
        return Err(SolveError::invalid(format!(
            "unexpected token {extra:?} after {n} items"
        )));
    }
    Instance::from_parts(n, target_cost, target_weight, &costs, &weights, limits)
}
