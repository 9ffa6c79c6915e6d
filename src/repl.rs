use crate::{
    console::Console,
    diagnostics::Result,
    menu::{Menu, OpKind},
    ops,
    scan::{self, TokenScanner},
    value::Outcome,
};

const WELCOME: &str = "Welcome to the Scientific Calculator";
const RULE: &str = "====================================";
const MENU_HEADER: &str = "\nChoose an operation:";
const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";
const FAREWELL: &str = "Exiting calculator. Goodbye!";

enum SessionState {
    Running,
    Stopped,
}

/// The interactive dispatcher: reads a menu choice and operands from the
/// console, routes them to the operations, and prints each outcome.
pub struct Session<C> {
    console: C,
    scanner: TokenScanner,
    menu: Menu,
    state: SessionState,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            scanner: TokenScanner::new(),
            menu: Menu::standard(),
            state: SessionState::Running,
        }
    }

    /// Runs the menu loop until the user picks Exit or input runs out.
    ///
    /// A non-numeric token where a number is expected is fatal and surfaces
    /// as [`crate::diagnostics::CalcError::MalformedInput`].
    pub fn run(&mut self) -> Result<()> {
        self.console.write_line(WELCOME)?;
        self.console.write_line(RULE)?;
        while matches!(self.state, SessionState::Running) {
            self.console.write_line(MENU_HEADER)?;
            for line in self.menu.lines() {
                self.console.write_line(&line)?;
            }
            let Some(token) = self.scanner.next_token(&mut self.console, CHOICE_PROMPT)? else {
                break;
            };
            let choice = scan::parse_integer(&token)?;
            self.dispatch(choice)?;
        }
        Ok(())
    }

    /// Hands the console back, typically to inspect captured output.
    pub fn into_console(self) -> C {
        self.console
    }

    fn dispatch(&mut self, choice: i64) -> Result<()> {
        let Some(entry) = self.menu.lookup(choice) else {
            return self.console.write_line(INVALID_CHOICE);
        };
        match entry.op {
            OpKind::SquareRoot => {
                let Some(x) = self.next_real("Enter a number: ")? else {
                    return self.halt();
                };
                self.report(ops::square_root(x))
            }
            OpKind::Factorial => {
                let Some(n) = self.next_integer("Enter a non-negative integer: ")? else {
                    return self.halt();
                };
                self.report(ops::factorial(n))
            }
            OpKind::NaturalLog => {
                let Some(x) = self.next_real("Enter a positive number: ")? else {
                    return self.halt();
                };
                self.report(ops::natural_log(x))
            }
            OpKind::Power => {
                let Some(base) = self.next_real("Enter the base (x): ")? else {
                    return self.halt();
                };
                let Some(exponent) = self.next_real("Enter the exponent (b): ")? else {
                    return self.halt();
                };
                self.report(ops::power(base, exponent))
            }
            OpKind::Exit => {
                self.state = SessionState::Stopped;
                self.console.write_line(FAREWELL)
            }
        }
    }

    fn next_real(&mut self, prompt: &str) -> Result<Option<f64>> {
        match self.scanner.next_token(&mut self.console, prompt)? {
            Some(token) => Ok(Some(scan::parse_real(&token)?)),
            None => Ok(None),
        }
    }

    fn next_integer(&mut self, prompt: &str) -> Result<Option<i64>> {
        match self.scanner.next_token(&mut self.console, prompt)? {
            Some(token) => Ok(Some(scan::parse_integer(&token)?)),
            None => Ok(None),
        }
    }

    fn report(&mut self, outcome: Outcome) -> Result<()> {
        self.console.write_line(&format!("Result: {outcome}"))
    }

    // Input ran out mid-operation; wind the session down quietly.
    fn halt(&mut self) -> Result<()> {
        self.state = SessionState::Stopped;
        Ok(())
    }
}
