use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[016789]\d{7,8}$").expect("valid mobile regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// 格式化手机号为 010-1234-5678 形式
///
/// 接受带或不带连字符、空格、+82 国家码的输入
pub fn format_mobile_phone(phone: &str) -> AppResult<String> {
    let mut digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if phone.trim_start().starts_with("+82") {
        digits = format!("0{}", &digits[2..]);
    }

    if !MOBILE_RE.is_match(&digits) {
        return Err(AppError::ValidationError(
            "Invalid mobile phone number (expected 010-XXXX-XXXX)".to_string(),
        ));
    }

    let (head, rest) = digits.split_at(3);
    let (middle, tail) = rest.split_at(rest.len() - 4);
    Ok(format!("{head}-{middle}-{tail}"))
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.len() > 255 || !EMAIL_RE.is_match(email) {
        return Err(AppError::ValidationError("Invalid email address".to_string()));
    }
    Ok(())
}

/// 去掉首尾空白后不能为空
pub fn require_text(field: &str, value: &str, max_len: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{field} is required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::ValidationError(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// 可选文本: 空白视为未提供
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
