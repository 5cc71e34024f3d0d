//! Folds product outcomes into aggregate counters.

use relfind_model::{Outcome, ProductOperatorCount, ProductOutcome, ResolutionSummary};

/// Builds the run summary from product outcomes and unmapped operators.
///
/// An operator entry counts as answered iff its product group resolved;
/// unmapped operators always count as unanswered.
pub fn summarize(
    products: &[ProductOutcome<'_>],
    unmapped: &[String],
    undated_excluded: usize,
) -> ResolutionSummary {
    let mut summary = ResolutionSummary {
        unmapped_operators: unmapped.len(),
        operators_without_answer: unmapped.len(),
        products_analyzed: products.len(),
        undated_excluded,
        ..ResolutionSummary::default()
    };
    for product in products {
        let operators = product.operators.len();
        match &product.outcome {
            Outcome::Resolved { matched, .. } => {
                summary.resolved_products += 1;
                summary.operators_with_answer += operators;
                summary.matched_releases += matched;
            }
            Outcome::Unresolved { .. } => {
                summary.unresolved_products += 1;
                summary.operators_without_answer += operators;
            }
        }
        summary.product_operator_counts.push(ProductOperatorCount {
            product: product.product.clone(),
            operators,
        });
    }
    summary.total_operators = summary.operators_with_answer + summary.operators_without_answer;
    summary
}
