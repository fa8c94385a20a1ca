use rand::Rng;

/// 生成邀请码等随机代码（大写字母 + 数字，去掉易混淆字符）
pub fn generate_random_code(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_length() {
        assert_eq!(generate_random_code(8).len(), 8);
    }

    #[test]
    fn test_generated_code_charset() {
        let code = generate_random_code(64);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
        // 易混淆字符不出现
        assert!(!code.contains('O') && !code.contains('0') && !code.contains('I'));
    }
}
