pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("メールアドレスを入力してください".into());
    }
    if !email.contains('@') {
        return Err("メールアドレスの形式が正しくありません".into());
    }
    if password.is_empty() {
        return Err("パスワードを入力してください".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn rejects_missing_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("taro@example.com", "").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_credentials("taro.example.com", "secret").is_err());
    }

    #[test]
    fn accepts_complete_credentials() {
        assert!(validate_credentials("taro@example.com", "secret").is_ok());
    }
}
