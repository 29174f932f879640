use bud_ledger_core::LedgerError;

/// Blocking `window.confirm`; `false` if the dialog cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Text shown to the user for a failed operation
pub fn user_message(error: &LedgerError) -> String {
    match error {
        LedgerError::InvalidBackup => "Невірний формат файлу".to_string(),
        LedgerError::Json(_) => "Помилка читання JSON".to_string(),
        LedgerError::NothingToExport => "Немає виконаних робіт".to_string(),
        LedgerError::IdsExhausted => "Не вдалося створити новий запис".to_string(),
        LedgerError::Storage(msg) => format!("Помилка збереження: {}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(user_message(&LedgerError::InvalidBackup), "Невірний формат файлу");
        assert_eq!(user_message(&LedgerError::NothingToExport), "Немає виконаних робіт");
        assert_eq!(
            user_message(&LedgerError::Storage("QuotaExceededError".to_string())),
            "Помилка збереження: QuotaExceededError"
        );
    }
}
