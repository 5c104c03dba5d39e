use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.project_points == 0 {
        errors.push("scoring.project_points: must be positive".to_string());
    }

    if config.project_max < config.project_points {
        errors.push(format!(
            "scoring.project_max: must be at least project_points ({})",
            config.project_points
        ));
    }

    if config.min_pages == 0 {
        errors.push("scoring.min_pages: must be positive".to_string());
    }

    for (i, code) in config.internal_funders.iter().enumerate() {
        if code.trim().is_empty() {
            errors.push(format!(
                "scoring.internal_funders[{}]: must not be blank (blank codes are always internal)",
                i
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate configured period bounds. Either end may be left open.
pub fn validate_period(since: Option<i32>, until: Option<i32>) -> Result<(), Vec<String>> {
    match (since, until) {
        (Some(since), Some(until)) if since > until => Err(vec![format!(
            "period.since: {} is after period.until {}",
            since, until
        )]),
        _ => Ok(()),
    }
}
