// self
use crate::obs::ForwardOutcome;

/// Records a terminal state via the global metrics recorder (when enabled).
pub fn record_forward_outcome(outcome: ForwardOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("gotify_pushover_forward_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_forward_outcome_noop_without_recorder() {
		record_forward_outcome(ForwardOutcome::SinkError);
	}
}
