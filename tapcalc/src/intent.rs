//! User intents and the keypad layout

use std::borrow::Cow;

use crate::engine::{CalculatorEngine, Operator};

/// One discrete user action, as forwarded by a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Digit(char),
    DecimalPoint,
    Clear,
    ToggleSign,
    Percent,
    Operator(Operator),
    Equals,
}

/// Button rows, top to bottom.
pub const KEYPAD_ROWS: &[&[Intent]] = &[
    &[Intent::Clear, Intent::ToggleSign, Intent::Percent, Intent::Operator(Operator::Divide)],
    &[Intent::Digit('7'), Intent::Digit('8'), Intent::Digit('9'), Intent::Operator(Operator::Multiply)],
    &[Intent::Digit('4'), Intent::Digit('5'), Intent::Digit('6'), Intent::Operator(Operator::Subtract)],
    &[Intent::Digit('1'), Intent::Digit('2'), Intent::Digit('3'), Intent::Operator(Operator::Add)],
    &[Intent::Digit('0'), Intent::DecimalPoint, Intent::Equals],
];

/// Columns in a full keypad row.
pub const KEYPAD_COLUMNS: usize = 4;

impl Intent {
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Intent::Digit(d) => Cow::Owned(d.to_string()),
            Intent::DecimalPoint => Cow::Borrowed("."),
            Intent::Clear => Cow::Borrowed("C"),
            Intent::ToggleSign => Cow::Borrowed("+/-"),
            Intent::Percent => Cow::Borrowed("%"),
            Intent::Operator(op) => Cow::Borrowed(op.symbol()),
            Intent::Equals => Cow::Borrowed("="),
        }
    }

    /// How many keypad columns this key spans.
    pub fn span(&self) -> usize {
        match self {
            Intent::Digit('0') => 2,
            _ => 1,
        }
    }

    /// Map a typed character to an intent.
    pub fn from_char(c: char) -> Option<Intent> {
        let intent = match c {
            '0'..='9' => Intent::Digit(c),
            '.' | ',' => Intent::DecimalPoint,
            '+' => Intent::Operator(Operator::Add),
            '-' | '−' => Intent::Operator(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Intent::Operator(Operator::Multiply),
            '/' | '÷' => Intent::Operator(Operator::Divide),
            '=' => Intent::Equals,
            '%' => Intent::Percent,
            'c' | 'C' => Intent::Clear,
            _ => return None,
        };
        Some(intent)
    }
}

impl CalculatorEngine {
    /// Forward an intent to the matching action.
    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("intent {:?}", intent);
        match intent {
            Intent::Digit(d) => self.append_digit(d),
            Intent::DecimalPoint => self.append_decimal_point(),
            Intent::Clear => self.clear(),
            Intent::ToggleSign => self.toggle_sign(),
            Intent::Percent => self.apply_percent(),
            Intent::Operator(op) => self.select_operator(op),
            Intent::Equals => self.equals(),
        }
    }

    /// Dispatch every mapped character of `input`, skipping the rest.
    pub fn dispatch_str(&mut self, input: &str) {
        for intent in input.chars().filter_map(Intent::from_char) {
            self.dispatch(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_rows_fill_columns() {
        for row in KEYPAD_ROWS {
            let width: usize = row.iter().map(Intent::span).sum();
            assert_eq!(width, KEYPAD_COLUMNS, "row {:?}", row);
        }
    }

    #[test]
    fn test_keypad_covers_every_intent() {
        let keys: Vec<Intent> = KEYPAD_ROWS.iter().flat_map(|r| r.iter().copied()).collect();
        for d in '0'..='9' {
            assert!(keys.contains(&Intent::Digit(d)));
        }
        for op in Operator::ALL {
            assert!(keys.contains(&Intent::Operator(op)));
        }
        for other in [Intent::DecimalPoint, Intent::Clear, Intent::ToggleSign, Intent::Percent, Intent::Equals] {
            assert!(keys.contains(&other));
        }
        assert_eq!(keys.len(), 19);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Intent::Digit('7').label(), "7");
        assert_eq!(Intent::ToggleSign.label(), "+/-");
        assert_eq!(Intent::Operator(Operator::Multiply).label(), "×");
        assert_eq!(Intent::Operator(Operator::Divide).label(), "÷");
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Intent::from_char('3'), Some(Intent::Digit('3')));
        assert_eq!(Intent::from_char(','), Some(Intent::DecimalPoint));
        assert_eq!(Intent::from_char('*'), Some(Intent::Operator(Operator::Multiply)));
        assert_eq!(Intent::from_char('÷'), Some(Intent::Operator(Operator::Divide)));
        assert_eq!(Intent::from_char('%'), Some(Intent::Percent));
        assert_eq!(Intent::from_char('C'), Some(Intent::Clear));
        assert_eq!(Intent::from_char('q'), None);
        assert_eq!(Intent::from_char(' '), None);
    }

    #[test]
    fn test_typed_labels_round_trip() {
        // every key except +/- can be typed using its own caption
        for row in KEYPAD_ROWS {
            for intent in row.iter().filter(|i| **i != Intent::ToggleSign) {
                let label = intent.label();
                let mut chars = label.chars();
                let c = chars.next().unwrap();
                assert!(chars.next().is_none());
                assert_eq!(Intent::from_char(c), Some(*intent));
            }
        }
    }

    #[test]
    fn test_dispatch_str() {
        let mut e = CalculatorEngine::new();
        e.dispatch_str("5 + 3 =");
        assert_eq!(e.display_value(), "8.0");
        assert_eq!(e.expression_trace(), "5 + 3 = 8.0");

        e.dispatch_str("c4/0=");
        assert_eq!(e.display_value(), "Error");
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let mut via_dispatch = CalculatorEngine::new();
        let mut direct = CalculatorEngine::new();

        via_dispatch.dispatch(Intent::Digit('9'));
        via_dispatch.dispatch(Intent::ToggleSign);
        via_dispatch.dispatch(Intent::Operator(Operator::Subtract));
        via_dispatch.dispatch(Intent::DecimalPoint);
        via_dispatch.dispatch(Intent::Digit('5'));
        via_dispatch.dispatch(Intent::Percent);
        via_dispatch.dispatch(Intent::Equals);

        direct.append_digit('9');
        direct.toggle_sign();
        direct.select_operator(Operator::Subtract);
        direct.append_decimal_point();
        direct.append_digit('5');
        direct.apply_percent();
        direct.equals();

        assert_eq!(via_dispatch, direct);
    }
}
