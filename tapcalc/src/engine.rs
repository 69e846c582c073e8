//! Calculator state machine
//!
//! One flat state object mutated in place by one method per user action.
//! Evaluation is strictly left to right with a single pending operation.
//! No action ever fails outward: it either changes state or does nothing.

use std::fmt;

use thiserror::Error;

/// Shown in place of a value when a calculation has no defined result.
pub const ERROR_MARKER: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Glyph used on the key and in the expression trace.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EngineError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(EngineError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(EngineError::NonFinite { lhs, op: self, rhs })
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("display value {0:?} is not a number")]
    NotANumber(String),
    #[error("display value {0:?} is out of range")]
    OutOfRange(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("{lhs} {op} {rhs} has no finite result")]
    NonFinite { lhs: f64, op: Operator, rhs: f64 },
}

/// Render a computed value for the display and trace.
///
/// Integral values keep a trailing `.0` (`8.0`, `-9.0`) and everything else
/// uses the shortest form that parses back to the same `f64`.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

/// Holds everything the calculator knows.
///
/// The presentation layer calls one action per key press and then re-reads
/// [`display_value`](Self::display_value) and
/// [`expression_trace`](Self::expression_trace).
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    display: String,
    trace: String,
    pending_operator: Option<Operator>,
    pending_operand: f64,
    starting_new_entry: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            trace: String::new(),
            pending_operator: None,
            pending_operand: 0.0,
            starting_new_entry: true,
        }
    }

    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn expression_trace(&self) -> &str {
        &self.trace
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn pending_operand(&self) -> f64 {
        self.pending_operand
    }

    pub fn is_starting_new_entry(&self) -> bool {
        self.starting_new_entry
    }

    /// True after a calculation failed. Only [`clear`](Self::clear) leaves this state.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    fn parse_display(&self) -> Result<f64, EngineError> {
        let value = self
            .display
            .parse::<f64>()
            .map_err(|_| EngineError::NotANumber(self.display.clone()))?;
        // enough typed digits parse as inf
        if !value.is_finite() {
            return Err(EngineError::OutOfRange(self.display.clone()));
        }
        Ok(value)
    }

    /// Parse the display. A value too large for `f64` puts the engine in
    /// the error state; anything else unparseable just skips the action.
    fn current_value(&mut self, action: &str) -> Option<f64> {
        match self.parse_display() {
            Ok(v) => Some(v),
            Err(e @ EngineError::OutOfRange(_)) => {
                self.enter_error(&e);
                None
            }
            Err(e) => {
                log::debug!("{} ignored: {}", action, e);
                None
            }
        }
    }

    fn enter_error(&mut self, err: &EngineError) {
        log::warn!("calculation failed: {}", err);
        self.display = ERROR_MARKER.to_string();
        self.trace = ERROR_MARKER.to_string();
        self.pending_operator = None;
        self.starting_new_entry = true;
    }

    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            log::debug!("append_digit ignored non-digit {:?}", digit);
            return;
        }
        if self.is_error() {
            log::debug!("append_digit ignored: clear required");
            return;
        }

        if self.starting_new_entry {
            self.display.clear();
            self.starting_new_entry = false;
        }
        self.display.push(digit);
        self.trace.push(digit);
        log::trace!("display={:?} trace={:?}", self.display, self.trace);
    }

    pub fn append_decimal_point(&mut self) {
        if self.is_error() {
            log::debug!("append_decimal_point ignored: clear required");
            return;
        }

        if self.starting_new_entry {
            self.display = "0.".to_string();
            self.starting_new_entry = false;
            self.trace.push_str("0.");
        } else if !self.display.contains('.') {
            self.display.push('.');
            self.trace.push('.');
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
        log::debug!("cleared");
    }

    /// Negate the display. The running trace is replaced by the new value.
    pub fn toggle_sign(&mut self) {
        let Some(value) = self.current_value("toggle_sign") else {
            return;
        };
        self.display = format_value(-value);
        self.trace = self.display.clone();
    }

    /// Divide the display by 100. The next digit starts a fresh number.
    pub fn apply_percent(&mut self) {
        let Some(value) = self.current_value("apply_percent") else {
            return;
        };
        self.display = format_value(value / 100.0);
        self.trace = self.display.clone();
        self.starting_new_entry = true;
    }

    /// Capture the display as left operand. Replaces any operator still
    /// pending; nothing is evaluated here.
    pub fn select_operator(&mut self, op: Operator) {
        let Some(value) = self.current_value("select_operator") else {
            return;
        };
        if let Some(previous) = self.pending_operator {
            log::debug!("operator {} replaced by {}", previous, op);
        }
        self.pending_operand = value;
        self.pending_operator = Some(op);
        self.starting_new_entry = true;
        self.trace.push(' ');
        self.trace.push_str(op.symbol());
        self.trace.push(' ');
    }

    pub fn equals(&mut self) {
        let Some(rhs) = self.current_value("equals") else {
            return;
        };
        let Some(op) = self.pending_operator else {
            log::debug!("equals ignored: no pending operator");
            return;
        };

        match op.apply(self.pending_operand, rhs) {
            Ok(result) => {
                self.display = format_value(result);
                self.trace.push_str(" = ");
                self.trace.push_str(&self.display);
                log::debug!("{} {} {} = {}", self.pending_operand, op, rhs, self.display);
            }
            Err(e) => self.enter_error(&e),
        }
        self.pending_operator = None;
        self.starting_new_entry = true;
    }
}
