//! Textual rendering of optimization outcomes.
//!
//! Presentation only: the optimizer's contract is the
//! [`OptimizationOutcome`] value, and these renderers turn one into the
//! end-of-run text a CLI prints, or JSON for machine consumption.

use swarm_descent_core::optimizer::OptimizationOutcome;

/// Render the end-of-run report as plain text.
///
/// Names the iteration count in a convergence or budget-exhaustion
/// diagnostic, then reports the best solution found.
pub fn render_text(outcome: &OptimizationOutcome) -> String {
    let mut out = String::new();
    if outcome.converged {
        out.push_str(&format!(
            "The swarm met the convergence criteria after {} iterations.\n",
            outcome.iterations
        ));
    } else {
        out.push_str(&format!(
            "The swarm exhausted its budget of {} iterations without converging.\n",
            outcome.iterations
        ));
    }
    out.push_str(&format!(
        "Best position: ({:.6}, {:.6})\n",
        outcome.best_position[0], outcome.best_position[1]
    ));
    out.push_str(&format!("Best fitness: {:.6e}\n", outcome.best_fitness));
    out
}

/// Serialize the outcome as pretty-printed JSON.
pub fn render_json(outcome: &OptimizationOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(converged: bool) -> OptimizationOutcome {
        OptimizationOutcome {
            best_position: [0.00125, -0.000750],
            best_fitness: 4.2e-4,
            iterations: 37,
            converged,
        }
    }

    #[test]
    fn converged_report_names_the_iteration_count() {
        let text = render_text(&sample(true));
        assert!(text.contains("convergence criteria after 37 iterations"));
        assert!(text.contains("Best position: (0.001250, -0.000750)"));
        assert!(text.contains("Best fitness: 4.2"));
    }

    #[test]
    fn exhausted_report_says_so() {
        let text = render_text(&sample(false));
        assert!(text.contains("exhausted its budget of 37 iterations"));
    }

    #[test]
    fn json_report_round_trips() {
        let outcome = sample(true);
        let json = render_json(&outcome).unwrap();
        let parsed: OptimizationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }
}
