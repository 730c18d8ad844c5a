use std::fmt;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing_subscriber::EnvFilter;

use services::{AdvanceOutcome, AssessmentFlow, Clock, Stage};
use vetting_core::model::{CompletionReason, Niche};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    niche: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut niche = std::env::var("VETTING_NICHE").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--niche" => {
                    let value = args
                        .next()
                        .ok_or(ArgsError::MissingValue { flag: "--niche" })?;
                    niche = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => return Err(ArgsError::UnknownArg(other.to_string())),
            }
        }

        Ok(Self { niche })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--niche <key>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --niche <key>   preselect a niche (e.g. frontend-dev)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VETTING_NICHE, RUST_LOG");
}

fn format_timer(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

/// Terminal driver for the wizard. Lines starting with `/` are commands;
/// anything else is treated as the current field or answer.
struct Wizard {
    flow: AssessmentFlow,
    preselect: Option<String>,
    pending_name: Option<String>,
}

impl Wizard {
    fn new(clock: Clock, preselect: Option<String>) -> Self {
        Self {
            flow: AssessmentFlow::new(clock),
            preselect,
            pending_name: None,
        }
    }

    fn prompt(&self) {
        match self.flow.stage() {
            Stage::Landing => {
                if self.pending_name.is_none() {
                    println!("Welcome to the OnSwift assessment.");
                    println!("Full name:");
                } else {
                    println!("Email address:");
                }
            }
            Stage::NicheSelection => {
                println!();
                println!("Pick your niche:");
                for (index, niche) in Niche::ALL.iter().enumerate() {
                    println!("  {}. {} ({})", index + 1, niche.title(), niche.key());
                }
                println!("Enter a number or key:");
            }
            Stage::Overview => {
                let overview = self.flow.overview();
                println!();
                println!("=== {} Assessment ===", overview.title());
                println!("{}", overview.description());
                println!();
                println!("Required tools:");
                for tool in overview.tools() {
                    println!("  - {tool}");
                }
                println!("Expectations:");
                for expectation in overview.expectations() {
                    println!("  - {expectation}");
                }
                println!("Key deliverables:");
                for deliverable in overview.deliverables() {
                    println!("  - {deliverable}");
                }
                println!();
                println!("Press Enter to start, or type /back to reselect.");
            }
            Stage::Assessment => self.prompt_question(),
            Stage::Results => {
                println!();
                println!("Congratulations on completing the OnSwift Assessment!");
                if let Some(summary) = self.flow.summary() {
                    let how = match summary.reason() {
                        CompletionReason::Finished => "all questions answered",
                        CompletionReason::TimedOut => "time expired",
                    };
                    println!(
                        "{} — answered {} of {} questions ({how}).",
                        summary.niche().title(),
                        summary.answered(),
                        summary.total(),
                    );
                }
                println!("We'll revert to you soonest.");
            }
        }
    }

    fn prompt_question(&self) {
        let Some(session) = self.flow.session() else {
            return;
        };
        let progress = session.progress();
        println!();
        println!("{}", session.current_phase().title());
        println!(
            "Question {} of {} | Phase {} of {} | Overall {}% | Time left {}",
            progress.question_index + 1,
            progress.question_count,
            progress.phase_index + 1,
            progress.phase_count,
            progress.percent(),
            format_timer(session.remaining_seconds()),
        );
        println!("{}", session.current_question().prompt());
        if let Some(existing) = session.answer(session.current_question().id()) {
            if !existing.trim().is_empty() {
                println!("(current answer: {existing})");
            }
        }
        println!("Type your answer (/prev to go back, /quit to leave):");
    }

    /// Handles one input line. Returns false when the wizard is done.
    fn handle_line(&mut self, line: &str) -> bool {
        match self.flow.stage() {
            Stage::Landing => self.handle_landing(line),
            Stage::NicheSelection => self.handle_selection(line),
            Stage::Overview => self.handle_overview(line),
            Stage::Assessment => return self.handle_assessment(line),
            Stage::Results => return false,
        }
        true
    }

    fn handle_landing(&mut self, line: &str) {
        match self.pending_name.take() {
            None => {
                if line.trim().is_empty() {
                    println!("Name cannot be empty.");
                } else {
                    self.pending_name = Some(line.to_string());
                }
            }
            Some(name) => {
                if let Err(error) = self.flow.submit_contact(&name, line) {
                    println!("{error}. Let's try again.");
                } else if let Some(key) = self.preselect.take() {
                    if self.flow.select_niche(&key) {
                        println!("Niche preselected: {key}");
                    } else {
                        println!("Unknown niche key {key:?}; pick one below.");
                    }
                }
            }
        }
    }

    fn handle_selection(&mut self, line: &str) {
        let input = line.trim();
        let key = input
            .parse::<usize>()
            .ok()
            .and_then(|number| Niche::ALL.get(number.checked_sub(1)?))
            .map_or_else(|| input.to_string(), |niche| niche.key().to_string());

        if !self.flow.select_niche(&key) {
            println!("No assessment found for {key:?}; try again.");
        }
    }

    fn handle_overview(&mut self, line: &str) {
        if line.trim() == "/back" {
            self.flow.back();
        } else {
            self.flow.start_assessment();
        }
    }

    fn handle_assessment(&mut self, line: &str) -> bool {
        match line.trim() {
            "/quit" => {
                // teardown: the session and its countdown die here
                self.flow.back();
                println!("Assessment abandoned.");
                return true;
            }
            "/prev" => {
                if !self.flow.retreat() {
                    println!("Already at the first question.");
                }
                return true;
            }
            _ => {}
        }

        // A blank line leaves any stored answer untouched and just retries
        // the gate; non-blank input overwrites.
        if !line.trim().is_empty() {
            self.flow.answer_current(line);
        }
        match self.flow.advance() {
            Some(AdvanceOutcome::Blocked) => {
                println!("An answer is required before moving on.");
                true
            }
            Some(AdvanceOutcome::Completed) => false,
            _ => true,
        }
    }

    /// One elapsed second. Returns false once the timer ended the session.
    fn handle_tick(&mut self) -> bool {
        self.flow.tick();
        self.flow.stage() != Stage::Results
    }
}

async fn run(args: Args) -> std::io::Result<()> {
    let mut wizard = Wizard::new(Clock::default_clock(), args.niche);
    let mut lines: Lines<BufReader<Stdin>> = BufReader::new(tokio::io::stdin()).lines();

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    wizard.prompt();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !wizard.handle_line(&line) {
                    break;
                }
                wizard.prompt();
            }
            _ = ticker.tick() => {
                if !wizard.handle_tick() {
                    break;
                }
            }
        }
    }

    if wizard.flow.stage() == Stage::Results {
        wizard.prompt();
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse(&mut std::env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            print_usage();
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(error) = run(args).await {
        eprintln!("io error: {error}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetting_core::time::fixed_clock;

    fn wizard() -> Wizard {
        Wizard::new(fixed_clock(), None)
    }

    #[test]
    fn format_timer_pads_seconds() {
        assert_eq!(format_timer(3600), "60:00");
        assert_eq!(format_timer(61), "1:01");
        assert_eq!(format_timer(9), "0:09");
    }

    #[test]
    fn landing_collects_name_then_email() {
        let mut wizard = wizard();
        assert!(wizard.handle_line("Ada Lovelace"));
        assert_eq!(wizard.flow.stage(), Stage::Landing);
        assert!(wizard.handle_line("ada@example.com"));
        assert_eq!(wizard.flow.stage(), Stage::NicheSelection);
    }

    #[test]
    fn selection_accepts_number_or_key() {
        let mut wizard = wizard();
        wizard.handle_line("Ada");
        wizard.handle_line("ada@example.com");
        wizard.handle_line("nonsense");
        assert_eq!(wizard.flow.stage(), Stage::NicheSelection);
        wizard.handle_line("frontend-dev");
        assert_eq!(wizard.flow.stage(), Stage::Overview);
    }

    #[test]
    fn enter_starts_the_assessment_from_the_overview() {
        let mut wizard = wizard();
        wizard.handle_line("Ada");
        wizard.handle_line("ada@example.com");
        wizard.handle_line("3");
        assert_eq!(wizard.flow.stage(), Stage::Overview);
        wizard.handle_line("");
        assert_eq!(wizard.flow.stage(), Stage::Assessment);
    }

    #[test]
    fn blank_answers_do_not_advance() {
        let mut wizard = wizard();
        wizard.handle_line("Ada");
        wizard.handle_line("ada@example.com");
        wizard.handle_line("virtual-assistant");
        wizard.handle_line("");
        assert!(wizard.handle_line("   "));
        let progress = wizard.flow.progress().unwrap();
        assert_eq!(progress.completed, 1);
    }
}
