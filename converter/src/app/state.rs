//! # Application State Types
//!
//! The form, the controller's display state, and the rendered view fields.

use shared::CurrencyCode;
use uuid::Uuid;

use crate::core::service::ConverterView;

/// Result line before any conversion, and after every input edit.
pub const RESULT_PLACEHOLDER: &str = "—";

/// Status line while a rate is being fetched.
pub const FETCHING_STATUS: &str = "Fetching rate…";

/// Amount the form starts with.
pub const DEFAULT_AMOUNT: &str = "1";

/// Preset amounts offered as one-click conversions.
pub const QUICK_AMOUNTS: [u32; 4] = [100, 500, 1000, 5000];

/// How the presentation layer should colour a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorIntent {
    #[default]
    Normal,
    Success,
    Error,
}

/// Outcome shown to the user, owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Nothing to show (startup, or an input was edited)
    #[default]
    Idle,
    /// A rate fetch is in flight
    Pending,
    /// Last fetch succeeded
    Converted {
        amount_text: String,
        rate_text: String,
        status_text: String,
    },
    /// Validation or fetch failed
    Error { message: String },
}

/// One conversion, captured when the user triggers it.
///
/// The amount and currencies are frozen here so later edits to the form do
/// not change how an in-flight result is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Correlates log lines for one fetch
    pub id: Uuid,
    pub amount: f64,
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: f64, base: CurrencyCode, target: CurrencyCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            base,
            target,
        }
    }
}

/// Form inputs as the user left them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterForm {
    pub amount: String,
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT.to_string(),
            base: CurrencyCode::USD,
            target: CurrencyCode::EUR,
        }
    }
}

/// Everything the window renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub form: ConverterForm,
    /// Controller state; the window only reads it
    pub display: DisplayState,
    pub result_text: String,
    pub result_intent: ColorIntent,
    pub rate_text: String,
    pub status_text: String,
    /// Convert button disabled, busy indicator shown
    pub convert_busy: bool,
    /// Rate from the most recent successful fetch
    pub last_rate: Option<f64>,
    /// Provider timestamp of that rate
    pub last_quote_at: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: ConverterForm::default(),
            display: DisplayState::Idle,
            result_text: RESULT_PLACEHOLDER.to_string(),
            result_intent: ColorIntent::Normal,
            rate_text: String::new(),
            status_text: String::new(),
            convert_busy: false,
            last_rate: None,
            last_quote_at: None,
        }
    }
}

impl ConverterView for AppState {
    fn read_amount_text(&self) -> String {
        self.form.amount.clone()
    }

    fn read_base_currency(&self) -> CurrencyCode {
        self.form.base
    }

    fn read_target_currency(&self) -> CurrencyCode {
        self.form.target
    }

    fn set_result_display(&mut self, text: &str, intent: ColorIntent) {
        self.result_text = text.to_string();
        self.result_intent = intent;
    }

    fn set_rate_display(&mut self, text: &str) {
        self.rate_text = text.to_string();
    }

    fn set_status_display(&mut self, text: &str) {
        self.status_text = text.to_string();
    }

    fn set_convert_control_busy(&mut self, busy: bool) {
        self.convert_busy = busy;
    }

    fn set_amount(&mut self, text: &str) {
        self.form.amount = text.to_string();
    }

    fn swap_currency_selections(&mut self) {
        std::mem::swap(&mut self.form.base, &mut self.form.target);
    }
}
