mod currency;
pub use currency::*;

use crate::currency_service::CurrencyService;

/// Общие данные для обработчиков
#[derive(Clone)]
pub struct AppState {
    pub currency_service: CurrencyService,
}
impl AppState {
    /// Создать новый экземпляр общих данных
    pub fn new(currency_service: CurrencyService) -> Self {
        Self { currency_service }
    }
}
