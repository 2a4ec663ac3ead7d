use crate::{
    algebra::{self, Node, Token},
    equations::Problem,
    Error,
};
use tracing::debug;

/// Evaluate an expression or solve an equation with the default
/// [`Calculator`].
pub fn evaluate(expression: &str) -> String {
    Calculator::new().eval(expression)
}

/// Evaluates arithmetic expressions and solves linear equations in `x`.
///
/// A [`Calculator`] holds no state between calls, only its settings.
///
/// ```rust
/// use calculator::Calculator;
///
/// let calc = Calculator::new();
///
/// assert_eq!(calc.eval("4 + 9"), "13");
/// assert_eq!(calc.eval("x + 5 = 11"), "6");
/// assert_eq!(calc.compute("2 * (3 + 4)").unwrap(), 14.0);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Calculator {
    verbose: bool,
}

impl Calculator {
    pub fn new() -> Self { Calculator::default() }

    /// Emit `debug` events describing each stage of the calculation.
    pub fn verbose(self, verbose: bool) -> Self { Calculator { verbose } }

    pub fn is_verbose(&self) -> bool { self.verbose }

    /// Evaluate an expression, rendering either the result or the error
    /// message.
    pub fn eval(&self, expression: &str) -> String {
        match self.compute(expression) {
            Ok(value) => format_number(value),
            Err(e) => e.to_string(),
        }
    }

    /// Run the full pipeline, returning the value of an expression or the
    /// root of an equation.
    pub fn compute(&self, expression: &str) -> Result<f64, Error> {
        let mut tokens = algebra::tokenize(expression)?;
        self.log_tokens(&tokens);

        let problem = Problem::classify(&tokens)?;
        problem.rewrite(&mut tokens);

        let postfix = algebra::to_postfix(&tokens)?;
        self.log_postfix(&postfix);

        let result = algebra::evaluate(&postfix)?;
        if self.verbose {
            let coefficients = result.coefficients();
            debug!(polynomial = %result, ?coefficients, ?problem, "Evaluated");
        }

        problem.answer(&result).map_err(Error::from)
    }

    fn log_tokens(&self, tokens: &[Token]) {
        if !self.verbose {
            return;
        }

        for token in tokens {
            debug!(%token, span = ?token.span, "Token");
        }
    }

    fn log_postfix(&self, postfix: &[Node]) {
        if !self.verbose {
            return;
        }

        let identifiers: Vec<_> =
            postfix.iter().map(Node::identifier).collect();
        let rendered = identifiers.join(" ");
        debug!(postfix = %rendered, "Built reverse polish notation");
    }
}

/// Significant digits shown in a result.
const PRECISION: usize = 6;

/// Render a number the way C's `%g` does: at most [`PRECISION`] significant
/// digits, no trailing zeros, and scientific notation for very large or very
/// small values.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}inf", sign);
    }

    // round to the right number of digits first so the exponent accounts
    // for carries (e.g. 999999.5 -> 1e+06)
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
