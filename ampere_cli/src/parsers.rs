pub fn parse_tolerance(input: &str) -> Result<f64, String> {
    let tolerance: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid tolerance: {input}"))?;

    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(format!(
            "Tolerance must be a finite non-negative number, got {input}"
        ));
    }

    Ok(tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerance() {
        assert_eq!(parse_tolerance("1e-6"), Ok(1e-6));
        assert_eq!(parse_tolerance("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_tolerance_rejects_negative_and_nan() {
        assert!(parse_tolerance("-1e-9").is_err());
        assert!(parse_tolerance("NaN").is_err());
        assert!(parse_tolerance("inf").is_err());
        assert!(parse_tolerance("abc").is_err());
    }
}
