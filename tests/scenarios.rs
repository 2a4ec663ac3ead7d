use approx::assert_relative_eq;
use calculator::{evaluate, Calculator, ErrorKind};
use pretty_assertions::assert_eq;

macro_rules! scenario {
    ($name:ident, $src:expr => fails with $kind:ident) => {
        #[test]
        fn $name() {
            let got = Calculator::new().compute($src).unwrap_err();

            assert_eq!(got.kind(), ErrorKind::$kind, "{}", got);
        }
    };
    ($name:ident, $src:expr => $should_be:expr) => {
        #[test]
        fn $name() {
            let got = evaluate($src);

            assert_eq!(got, $should_be);
        }
    };
}

scenario!(simple_sum, "4 + 9" => "13");
scenario!(solve_for_x, "x + 5 = 11" => "6");
scenario!(
    variable_on_both_sides_of_a_function,
    "x + x * (10 / cos(2)) = min(15, pow(2, 3))" => "-0.347373"
);
scenario!(
    no_solution_message,
    "x * 0 = 10" => "Constant can't equal 0, no solutions"
);
scenario!(
    lonely_equals_message,
    "=" => "Expression must contain both a variable and equal sign or neither"
);
scenario!(
    too_few_arguments_message,
    "max(1)" => "Error in processing reverse polish notation: Insufficient \
                 number of operands for max"
);
scenario!(
    unclosed_parenthesis_message,
    "(5" => "Error in building reverse polish notation: Mismatched parantheses"
);
scenario!(
    unknown_function_message,
    "lag(10)" => "Error in building reverse polish notation: Invalid \
                  mathematical function or operator lag"
);
scenario!(literal_round_trips, "42.5" => "42.5");
scenario!(negative_result, "1 - 3 * 2" => "-5");
scenario!(negated_group, "-(2 + 3) * 2" => "-10");
scenario!(tabs_are_whitespace, "1\t+\t2" => "3");
scenario!(fractional_root, "3 * x - 1 = 0" => "0.333333");
scenario!(equals_subtracts_left_to_right, "x = 3 + 2" => "1");
scenario!(parenthesised_right_side, "x = (3 + 2)" => "5");

scenario!(no_solution, "x * 0 = 10" => fails with NoSolution);
scenario!(infinite_solutions, "x * 0 = 0" => fails with InfiniteSolutions);
scenario!(lonely_equals, "=" => fails with InconsistentEquationForm);
scenario!(
    variable_without_equals,
    "x + 1" => fails with InconsistentEquationForm
);
scenario!(too_many_equals, "x = 1 = 1" => fails with MultipleEqualitySigns);
scenario!(too_few_arguments, "max(1)" => fails with InsufficientOperands);
scenario!(too_many_arguments, "max(1,2,3)" => fails with ExcessOperands);
scenario!(unclosed_parenthesis, "(5" => fails with MismatchedParentheses);
scenario!(unopened_parenthesis, "5)" => fails with MismatchedParentheses);
scenario!(
    unbalanced_function_call,
    "max(1, 2" => fails with MismatchedParentheses
);
scenario!(unknown_function, "lag(10)" => fails with UnknownSymbol);
scenario!(number_followed_by_x, "3x = 1" => fails with InvalidNumber);
scenario!(number_with_two_dots, "1.2.3" => fails with InvalidNumber);
scenario!(
    function_without_parens,
    "sin+1" => fails with InvalidFunctionSyntax
);
scenario!(unsupported_character, "2 % 3" => fails with InvalidOperator);
scenario!(divide_by_zero, "1 / 0" => fails with DivisionByZero);
scenario!(divide_by_x, "1 / x = 2" => fails with UnsupportedOperation);
scenario!(square_of_x, "x * x = 4" => fails with UnsupportedOperation);
scenario!(sine_of_x, "sin(x) = 0" => fails with NonConstantOperand);
scenario!(log_of_zero, "log(0)" => fails with DomainError);

#[test]
fn arithmetic_matches_native_floats() {
    let calc = Calculator::new();
    let inputs = vec![
        ("1 + 2 * 3 - 4 / 5", 1.0 + 2.0 * 3.0 - 4.0 / 5.0),
        ("10 - 4 - 3", 10.0 - 4.0 - 3.0),
        ("100 / 10 / 5", 100.0 / 10.0 / 5.0),
        ("2 * (3 + 4) * 5", 2.0 * (3.0 + 4.0) * 5.0),
        ("((1))", 1.0),
        ("0.5 * 0.25 + 7", 0.5 * 0.25 + 7.0),
    ];

    for (src, should_be) in inputs {
        let got = calc.compute(src).unwrap();

        assert_relative_eq!(got, should_be);
    }
}

#[test]
fn evaluating_twice_gives_the_same_answer() {
    let calc = Calculator::new();
    let src = "x + x * (10 / cos(2)) = min(15, pow(2, 3))";

    assert_eq!(calc.eval(src), calc.eval(src));
    assert_eq!(calc.compute("4 + 9"), calc.compute("4 + 9"));
}

#[test]
fn calculators_can_be_shared_between_threads() {
    let calc = Calculator::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || calc.eval(&format!("x - {} = 1", i)))
        })
        .collect();

    let got: Vec<String> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(got, vec!["1", "2", "3", "4"]);
}
