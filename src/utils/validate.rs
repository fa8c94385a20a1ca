use once_cell::sync::Lazy;
use regex::Regex;

static CONSTRAINT_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_\-/]+$").expect("Invalid constraint url regex"));

/// 校验约束的路由键
///
/// 小写字母、数字、下划线、连字符和斜杠，长度 3 到 64。
pub fn validate_constraint_url(url: &str) -> Result<(), &'static str> {
    if url.len() < 3 || url.len() > 64 {
        return Err("Constraint url length must be between 3 and 64 characters");
    }
    if !CONSTRAINT_URL_RE.is_match(url) {
        return Err(
            "Constraint url must contain only lowercase letters, numbers, underscores, hyphens or slashes",
        );
    }
    Ok(())
}

/// 校验约束阈值（必须为正）
pub fn validate_threshold(threshold: i64) -> Result<(), &'static str> {
    if threshold <= 0 {
        return Err("Constraint threshold must be positive");
    }
    Ok(())
}

/// 校验量表题的刻度数（只认 3 / 5 / 7 档）
pub fn validate_scale_size(number_of_scale: i32) -> Result<(), &'static str> {
    match number_of_scale {
        3 | 5 | 7 => Ok(()),
        _ => Err("Scale size must be 3, 5 or 7"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constraint_url() {
        assert!(validate_constraint_url("course/login").is_ok());
        assert!(validate_constraint_url("assignment-submitted").is_ok());
        assert!(validate_constraint_url("grade_90").is_ok());
    }

    #[test]
    fn test_url_rejects_uppercase_and_spaces() {
        assert!(validate_constraint_url("Login").is_err());
        assert!(validate_constraint_url("my url").is_err());
    }

    #[test]
    fn test_url_rejects_bad_length() {
        assert!(validate_constraint_url("ab").is_err());
        assert!(validate_constraint_url(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_threshold_must_be_positive() {
        assert!(validate_threshold(1).is_ok());
        assert!(validate_threshold(0).is_err());
        assert!(validate_threshold(-5).is_err());
    }

    #[test]
    fn test_scale_size_whitelist() {
        assert!(validate_scale_size(3).is_ok());
        assert!(validate_scale_size(5).is_ok());
        assert!(validate_scale_size(7).is_ok());
        assert!(validate_scale_size(4).is_err());
        assert!(validate_scale_size(10).is_err());
    }
}
