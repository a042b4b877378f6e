//! # Conversion Controller
//!
//! State transitions of the converter, written against [`ConverterView`] so
//! they can run on the real [`AppState`](crate::app::AppState) or on a test
//! double.
//!
//! ```text
//! Idle ──convert──▶ Pending ──result──▶ Converted | Error
//!  ▲                                          │
//!  └──────────────── input edit ──────────────┘
//! ```
//!
//! Invalid input goes straight from Idle to Error without a fetch.

use shared::utils::format_number;

use crate::app::state::{ColorIntent, ConversionRequest, DisplayState, FETCHING_STATUS, RESULT_PLACEHOLDER};
use crate::core::error::Result;
use crate::core::service::ConverterView;
use crate::services::api::RateQuoteResult;
use crate::utils::time::rate_updated_status;
use crate::utils::validation::parse_amount;

/// An input changed: drop the stale result. In-flight fetches are left alone.
pub(crate) fn clear_result<V: ConverterView>(view: &mut V) -> DisplayState {
    view.set_result_display(RESULT_PLACEHOLDER, ColorIntent::Normal);
    view.set_rate_display("");
    DisplayState::Idle
}

/// Show `message` inline in place of a result.
pub(crate) fn show_error<V: ConverterView>(view: &mut V, message: &str) -> DisplayState {
    view.set_result_display(message, ColorIntent::Error);
    view.set_rate_display("");
    view.set_status_display("");
    DisplayState::Error {
        message: message.to_string(),
    }
}

/// Validate the form and, if it holds a usable amount, enter Pending.
///
/// Returns the request to hand to the rate fetcher. On an input error the
/// view is untouched; the caller decides how to display it.
pub(crate) fn begin_conversion<V: ConverterView>(view: &mut V) -> Result<ConversionRequest> {
    let base = view.read_base_currency();
    let target = view.read_target_currency();
    let amount = parse_amount(&view.read_amount_text())?;

    view.set_convert_control_busy(true);
    view.set_status_display(FETCHING_STATUS);

    Ok(ConversionRequest::new(amount, base, target))
}

/// Render the outcome of `request`'s fetch.
pub(crate) fn complete_conversion<V: ConverterView>(
    view: &mut V,
    request: &ConversionRequest,
    result: RateQuoteResult,
) -> DisplayState {
    view.set_convert_control_busy(false);

    let quote = match result {
        Ok(quote) => quote,
        Err(e) => return show_error(view, e.message()),
    };

    let converted = request.amount * quote.rate;

    let amount_text = format!(
        "{} {} = {} {}",
        format_number(request.amount),
        request.base,
        format_number(converted),
        request.target
    );
    let rate_text = format!(
        "1 {} = {} {}",
        request.base,
        format_number(quote.rate),
        request.target
    );
    let status_text = rate_updated_status(quote.retrieved_at.as_deref());

    view.set_result_display(&amount_text, ColorIntent::Success);
    view.set_rate_display(&rate_text);
    view.set_status_display(&status_text);

    DisplayState::Converted {
        amount_text,
        rate_text,
        status_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::api::RateQuote;
    use shared::CurrencyCode;

    /// Records every call the controller makes.
    #[derive(Debug, Default)]
    struct RecordingView {
        amount: String,
        base: Option<CurrencyCode>,
        target: Option<CurrencyCode>,
        calls: Vec<String>,
    }

    impl RecordingView {
        fn with_amount(amount: &str) -> Self {
            Self {
                amount: amount.to_string(),
                base: Some(CurrencyCode::USD),
                target: Some(CurrencyCode::EUR),
                calls: Vec::new(),
            }
        }
    }

    impl ConverterView for RecordingView {
        fn read_amount_text(&self) -> String {
            self.amount.clone()
        }

        fn read_base_currency(&self) -> CurrencyCode {
            self.base.unwrap_or(CurrencyCode::USD)
        }

        fn read_target_currency(&self) -> CurrencyCode {
            self.target.unwrap_or(CurrencyCode::EUR)
        }

        fn set_result_display(&mut self, text: &str, intent: ColorIntent) {
            self.calls.push(format!("result:{text}:{intent:?}"));
        }

        fn set_rate_display(&mut self, text: &str) {
            self.calls.push(format!("rate:{text}"));
        }

        fn set_status_display(&mut self, text: &str) {
            self.calls.push(format!("status:{text}"));
        }

        fn set_convert_control_busy(&mut self, busy: bool) {
            self.calls.push(format!("busy:{busy}"));
        }

        fn set_amount(&mut self, text: &str) {
            self.amount = text.to_string();
        }

        fn swap_currency_selections(&mut self) {
            std::mem::swap(&mut self.base, &mut self.target);
        }
    }

    #[test]
    fn test_clear_result_resets_result_and_rate_only() {
        let mut view = RecordingView::default();
        let display = clear_result(&mut view);

        assert_eq!(display, DisplayState::Idle);
        assert_eq!(view.calls, vec!["result:—:Normal", "rate:"]);
    }

    #[test]
    fn test_begin_conversion_enters_pending() {
        let mut view = RecordingView::with_amount("1,000");
        let request = begin_conversion(&mut view).unwrap();

        assert_eq!(request.amount, 1000.0);
        assert_eq!(request.base, CurrencyCode::USD);
        assert_eq!(request.target, CurrencyCode::EUR);
        assert_eq!(view.calls, vec!["busy:true", "status:Fetching rate…"]);
    }

    #[test]
    fn test_begin_conversion_rejects_bad_input_without_touching_view() {
        let mut view = RecordingView::with_amount("abc");
        let err = begin_conversion(&mut view).unwrap_err();

        assert_eq!(err, AppError::Input("Invalid number".to_string()));
        assert!(view.calls.is_empty());
    }

    #[test]
    fn test_show_error_clears_rate_and_status() {
        let mut view = RecordingView::default();
        let display = show_error(&mut view, "Enter an amount");

        assert_eq!(
            display,
            DisplayState::Error {
                message: "Enter an amount".to_string()
            }
        );
        assert_eq!(view.calls, vec!["result:Enter an amount:Error", "rate:", "status:"]);
    }

    #[test]
    fn test_complete_conversion_success() {
        let mut view = RecordingView::default();
        let request = ConversionRequest::new(100.0, CurrencyCode::USD, CurrencyCode::EUR);
        let quote = RateQuote {
            rate: 0.92,
            retrieved_at: Some("Mon, 01 Jan 2024 12:00:00 +0000".to_string()),
        };

        let display = complete_conversion(&mut view, &request, Ok(quote));

        assert_eq!(
            display,
            DisplayState::Converted {
                amount_text: "100 USD = 92 EUR".to_string(),
                rate_text: "1 USD = 0.92 EUR".to_string(),
                status_text: "Rate updated 01 Jan 2024, 12:00 UTC".to_string(),
            }
        );
        assert_eq!(
            view.calls,
            vec![
                "busy:false",
                "result:100 USD = 92 EUR:Success",
                "rate:1 USD = 0.92 EUR",
                "status:Rate updated 01 Jan 2024, 12:00 UTC",
            ]
        );
    }

    #[test]
    fn test_complete_conversion_does_not_round_before_formatting() {
        let mut view = RecordingView::default();
        let request = ConversionRequest::new(3.0, CurrencyCode::USD, CurrencyCode::EUR);
        let quote = RateQuote {
            rate: 0.333333,
            retrieved_at: None,
        };

        let display = complete_conversion(&mut view, &request, Ok(quote));

        // 3 * 0.333333 = 0.999999, which survives only if the product is unrounded
        match display {
            DisplayState::Converted { amount_text, status_text, .. } => {
                assert_eq!(amount_text, "3 USD = 0.999999 EUR");
                assert_eq!(status_text, "");
            }
            other => panic!("expected Converted, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_conversion_failure() {
        let mut view = RecordingView::default();
        let request = ConversionRequest::new(1.0, CurrencyCode::USD, CurrencyCode::EUR);

        let display = complete_conversion(
            &mut view,
            &request,
            Err(AppError::Transport("No internet connection".to_string())),
        );

        assert_eq!(
            display,
            DisplayState::Error {
                message: "No internet connection".to_string()
            }
        );
        assert_eq!(view.calls[0], "busy:false");
    }
}
